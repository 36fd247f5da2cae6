//! Domain layer for campus-faq
//!
//! This crate contains the core entities, value objects and pure logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Consolidation
//!
//! Students submit free-text questions. Many of them ask the same thing in
//! different words. Consolidation groups those questions by theme and turns
//! each theme into a single FAQ entry:
//!
//! - [`QuestionBatch`]: the raw questions, passed through verbatim
//! - [`FaqItem`]: one consolidated question with its generated answer
//! - [`FaqResult`]: the ordered list of items produced by one consolidation
//!
//! ## Collaborators
//!
//! - **Inbox**: [`Notification`]s that students send to a teacher
//! - **FAQ store**: [`StoredFaq`] records a teacher has published

pub mod config;
pub mod core;
pub mod faq;
pub mod inbox;
pub mod prompt;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, model::Model, question::QuestionBatch};
pub use faq::{
    entities::{FaqItem, FaqResult},
    parsing::{extract_json_payload, parse_faq_output},
    schema::OutputSchema,
    stored::{FaqDraft, FaqId, StoredFaq},
};
pub use inbox::{InboxFilter, Notification, REPLY_PREFIX};
pub use prompt::FaqPromptTemplate;
