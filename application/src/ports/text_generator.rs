//! Text generation port
//!
//! Defines the interface for asking a generative backend for structured output.

use async_trait::async_trait;
use campus_domain::{Model, OutputSchema};
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while calling a generative backend
///
/// These are call failures. A backend that answers but produces nothing
/// usable is not an error: see [`TextGenerator::generate`].
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

impl GenerationError {
    /// Check if the failure is likely transient (worth a manual retry)
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::ConnectionError(_) | GenerationError::Timeout
        )
    }
}

/// Port to a generative text backend
///
/// Implementations (adapters) live in the infrastructure layer. They hold
/// no per-call state, so one instance can serve concurrent callers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// The model this generator targets
    fn model(&self) -> &Model;

    /// Send `prompt` constrained by `schema`.
    ///
    /// Returns `Ok(Some(value))` with the structured output, `Ok(None)` when
    /// the backend answered without anything parseable, and `Err` when the
    /// call itself failed.
    async fn generate(
        &self,
        prompt: &str,
        schema: &OutputSchema,
    ) -> Result<Option<Value>, GenerationError>;
}
