//! Infrastructure layer for campus-faq
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: generative backends over HTTP, JSON-file
//! stores, transcript logging and configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use logging::JsonlConversationLogger;
pub use providers::{GeminiTextGenerator, OllamaTextGenerator, ProviderKind, build_generator};
pub use storage::{JsonFaqStore, JsonInbox};
