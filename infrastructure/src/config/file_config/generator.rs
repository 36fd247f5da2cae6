//! Generator configuration from TOML (`[generator]` section)

use crate::providers::ProviderKind;
use campus_domain::Model;
use serde::{Deserialize, Serialize};

/// Default HTTP timeout for a generation call
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Which backend and model consolidation runs against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Backend name: "gemini" or "ollama"
    pub provider: String,
    /// Model name as the backend knows it; the provider's default when unset
    pub model: Option<String>,
    /// HTTP timeout for one generation call
    pub timeout_seconds: u64,
    /// Sampling temperature; backend default when unset
    pub temperature: Option<f32>,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default().to_string(),
            model: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            temperature: None,
        }
    }
}

impl FileGeneratorConfig {
    /// The configured provider, or the default one if the name is unknown
    pub fn provider_kind(&self) -> ProviderKind {
        self.provider.parse().unwrap_or_default()
    }

    /// The configured model, or the provider's default
    pub fn parse_model(&self) -> Model {
        match &self.model {
            Some(name) => {
                let Ok(model) = name.parse::<Model>();
                model
            }
            None => self.provider_kind().default_model(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_follows_provider() {
        let mut config = FileGeneratorConfig::default();
        assert_eq!(config.parse_model(), Model::Gemini20Flash);

        config.provider = "ollama".to_string();
        assert_eq!(config.parse_model(), Model::Llama32);

        config.model = Some("qwen2.5".to_string());
        assert_eq!(config.parse_model(), Model::Qwen25);
    }
}
