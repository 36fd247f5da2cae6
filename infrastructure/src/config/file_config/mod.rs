//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generator;
mod logging;
mod output;
mod providers;
mod store;

pub use generator::{DEFAULT_TIMEOUT_SECONDS, FileGeneratorConfig};
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGeminiConfig, FileOllamaConfig, FileProvidersConfig};
pub use store::FileStoreConfig;

use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("generator.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("generator.model cannot be empty")]
    EmptyModelName,

    #[error("generator.temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("unknown generator.provider '{0}' (expected \"gemini\" or \"ollama\")")]
    UnknownProvider(String),

    #[error("generator.model '{model}' is not served by provider '{provider}'")]
    ProviderModelMismatch { provider: String, model: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend and model selection
    pub generator: FileGeneratorConfig,
    /// Per-backend connection settings
    pub providers: FileProvidersConfig,
    /// JSON store location
    pub store: FileStoreConfig,
    /// Transcript and file logging
    pub logging: FileLoggingConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generator.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if let Some(model) = &self.generator.model
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName);
        }

        if let Some(t) = self.generator.temperature
            && !(0.0..=2.0).contains(&t)
        {
            return Err(ConfigValidationError::InvalidTemperature(t));
        }

        let Ok(provider) = self.generator.provider.parse::<ProviderKind>() else {
            return Err(ConfigValidationError::UnknownProvider(
                self.generator.provider.clone(),
            ));
        };

        let model = self.generator.parse_model();
        if !provider.serves(&model) {
            return Err(ConfigValidationError::ProviderModelMismatch {
                provider: provider.to_string(),
                model: model.to_string(),
            });
        }

        Ok(())
    }

    /// Render the effective configuration as TOML (for `--show-config`)
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_domain::{Model, OutputFormat};
    use std::path::PathBuf;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[generator]
provider = "ollama"
model = "llama3.2"
timeout_seconds = 120
temperature = 0.2

[providers.ollama]
base_url = "http://gpu-box:11434"

[store]
data_dir = "/var/lib/campus-faq"

[logging]
conversation_log = true

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.provider, "ollama");
        assert_eq!(config.generator.parse_model(), Model::Llama32);
        assert_eq!(config.generator.timeout_seconds, 120);
        assert_eq!(config.generator.temperature, Some(0.2));
        assert_eq!(config.providers.ollama.base_url, "http://gpu-box:11434");
        assert_eq!(
            config.store.data_dir,
            Some(PathBuf::from("/var/lib/campus-faq"))
        );
        assert!(config.logging.conversation_log);
        assert!(!config.logging.file);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[generator]
model = "gemini-2.5-pro"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.generator.parse_model(), Model::Gemini25Pro);
        // Defaults should apply
        assert_eq!(config.generator.provider, "gemini");
        assert_eq!(config.generator.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.providers.gemini.api_key_env, "GEMINI_API_KEY");
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.generator.parse_model(), Model::Gemini20Flash);
        assert!(config.generator.temperature.is_none());
        assert!(!config.logging.conversation_log);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_to_toml_round_trips_through_loader_format() {
        let mut config = FileConfig::default();
        config.generator.provider = "ollama".to_string();
        config.output.format = Some(OutputFormat::Json);

        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("[generator]"));
        let parsed: FileConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[generator]\ntimeout_seconds = 0\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_name() {
        let config: FileConfig = toml::from_str("[generator]\nmodel = \" \"\n").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));
    }

    #[test]
    fn test_validate_temperature_range() {
        let config: FileConfig = toml::from_str("[generator]\ntemperature = 3.5\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTemperature(3.5))
        );
    }

    #[test]
    fn test_validate_unknown_provider() {
        let config: FileConfig = toml::from_str("[generator]\nprovider = \"copilot\"\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownProvider("copilot".to_string()))
        );
    }

    #[test]
    fn test_ollama_without_model_uses_local_default() {
        let config: FileConfig = toml::from_str("[generator]\nprovider = \"ollama\"\n").unwrap();
        assert_eq!(config.generator.parse_model(), Model::Llama32);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_provider_model_mismatch() {
        let config: FileConfig =
            toml::from_str("[generator]\nprovider = \"ollama\"\nmodel = \"gemini-2.5-pro\"\n")
                .unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ProviderModelMismatch {
                provider: "ollama".to_string(),
                model: "gemini-2.5-pro".to_string(),
            })
        );

        let config: FileConfig = toml::from_str("[generator]\nmodel = \"qwen2.5\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ProviderModelMismatch { .. })
        ));
    }
}
