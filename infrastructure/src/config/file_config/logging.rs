//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write prompts and results as JSONL transcripts
    pub conversation_log: bool,
    /// Also write tracing output to a daily rolling file
    pub file: bool,
    /// Log directory; defaults to `<data_dir>/logs`
    pub dir: Option<PathBuf>,
}
