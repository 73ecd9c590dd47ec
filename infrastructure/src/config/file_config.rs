//! Configuration file schema.

use quizkey_application::GeneratorParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root of the optional `quizkey.toml` configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub generator: FileGeneratorConfig,

    #[serde(default)]
    pub output: FileOutputConfig,
}

/// `[generator]` section: rationale-generator tunables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileGeneratorConfig {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    /// Pause between consecutive API calls, in milliseconds.
    pub pacing_ms: Option<u64>,
}

/// `[output]` section: report destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileOutputConfig {
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    /// Merge the file values over the built-in generator defaults.
    pub fn generator_params(&self) -> GeneratorParams {
        let mut params = GeneratorParams::default();
        if let Some(model) = &self.generator.model {
            params = params.with_model(model.as_str());
        }
        if let Some(temperature) = self.generator.temperature {
            params = params.with_temperature(temperature);
        }
        if let Some(pacing_ms) = self.generator.pacing_ms {
            params = params.with_pacing(Duration::from_millis(pacing_ms));
        }
        params
    }
}
