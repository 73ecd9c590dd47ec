//! Configuration file loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FileGeneratorConfig, FileOutputConfig};
pub use loader::ConfigLoader;
