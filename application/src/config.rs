//! Generator parameters.

use std::time::Duration;

/// Tunables for the rationale generator.
///
/// Defaults match the reference behavior: `gpt-4-turbo`, temperature
/// 0.5, and a one-second pause between consecutive API calls to respect
/// provider rate limits.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorParams {
    pub model: String,
    pub temperature: f64,
    pub pacing: Duration,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            model: "gpt-4-turbo".to_string(),
            temperature: 0.5,
            pacing: Duration::from_millis(1000),
        }
    }
}

impl GeneratorParams {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = GeneratorParams::default();
        assert_eq!(params.model, "gpt-4-turbo");
        assert_eq!(params.temperature, 0.5);
        assert_eq!(params.pacing, Duration::from_millis(1000));
    }

    #[test]
    fn test_builder_overrides() {
        let params = GeneratorParams::default()
            .with_model("gpt-4o")
            .with_pacing(Duration::from_millis(250));
        assert_eq!(params.model, "gpt-4o");
        assert_eq!(params.pacing, Duration::from_millis(250));
        assert_eq!(params.temperature, 0.5);
    }
}
