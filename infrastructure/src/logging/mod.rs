//! Consolidation transcript logging
//!
//! Provides [`JsonlConversationLogger`], which appends every prompt and
//! result to a JSONL file through the
//! [`ConversationLogger`](campus_application::ConversationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::{DEFAULT_LOG_FILE, JsonlConversationLogger};
