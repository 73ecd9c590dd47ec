//! Infrastructure layer for quizkey
//!
//! This crate contains adapters that implement the ports defined in
//! the application layer, plus configuration file loading.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileGeneratorConfig, FileOutputConfig};
pub use openai::OpenAiRationaleGateway;
