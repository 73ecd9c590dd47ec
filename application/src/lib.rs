//! Application layer for quizkey
//!
//! This crate contains the use cases and port definitions. It depends
//! only on the domain layer; adapters for the ports live in the
//! infrastructure and presentation layers.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GeneratorParams;
pub use ports::{
    progress::{ConsolidationProgress, NoProgress},
    rationale_gateway::{GatewayError, RationaleGateway},
};
pub use use_cases::consolidate_rationales::{ConsolidateError, ConsolidateRationalesUseCase};
