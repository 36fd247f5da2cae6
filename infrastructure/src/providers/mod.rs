//! Generative backend adapters
//!
//! Each adapter implements the application's [`TextGenerator`] port over
//! one HTTP API. [`build_generator`] picks the adapter named in the config.

pub mod gemini;
pub mod http;
pub mod ollama;

use crate::config::FileConfig;
use campus_application::ports::text_generator::{GenerationError, TextGenerator};
use campus_domain::Model;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub use gemini::GeminiTextGenerator;
pub use ollama::OllamaTextGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Gemini,
    Ollama,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::Ollama => "ollama",
        }
    }

    /// Model used when `[generator].model` is unset
    pub fn default_model(&self) -> Model {
        match self {
            ProviderKind::Gemini => Model::Gemini20Flash,
            ProviderKind::Ollama => Model::Llama32,
        }
    }

    /// Whether this backend can plausibly serve `model`
    pub fn serves(&self, model: &Model) -> bool {
        match self {
            ProviderKind::Gemini => !model.is_local(),
            ProviderKind::Ollama => !model.is_gemini(),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            "ollama" => Ok(ProviderKind::Ollama),
            other => Err(format!("unknown provider: {}", other)),
        }
    }
}

/// Build the generator selected by `[generator].provider`
pub fn build_generator(config: &FileConfig) -> Result<Arc<dyn TextGenerator>, GenerationError> {
    let kind: ProviderKind = config
        .generator
        .provider
        .parse()
        .map_err(GenerationError::Other)?;
    let model = config.generator.parse_model();
    let timeout = Duration::from_secs(config.generator.timeout_seconds);
    let temperature = config.generator.temperature;

    info!(provider = %kind, model = %model, "Initializing text generator");

    let generator: Arc<dyn TextGenerator> = match kind {
        ProviderKind::Gemini => {
            let gemini = &config.providers.gemini;
            let api_key = gemini.resolve_api_key().ok_or_else(|| {
                GenerationError::Unauthorized(format!(
                    "no Gemini API key: set {} or providers.gemini.api_key",
                    gemini.api_key_env
                ))
            })?;
            Arc::new(
                GeminiTextGenerator::new(&gemini.base_url, api_key, model, timeout)?
                    .with_temperature(temperature),
            )
        }
        ProviderKind::Ollama => Arc::new(
            OllamaTextGenerator::new(&config.providers.ollama.base_url, model, timeout)?
                .with_temperature(temperature),
        ),
    };

    Ok(generator)
}
