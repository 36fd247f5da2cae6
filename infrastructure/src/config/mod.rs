//! Configuration file loading for campus-faq
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CAMPUS_FAQ_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./campus-faq.toml` or `./.campus-faq.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/campus-faq/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_TIMEOUT_SECONDS, FileConfig, FileGeminiConfig,
    FileGeneratorConfig, FileLoggingConfig, FileOllamaConfig, FileOutputConfig,
    FileProvidersConfig, FileStoreConfig,
};
pub use loader::ConfigLoader;
