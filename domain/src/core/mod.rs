//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — generative models the consolidator can target
//! - [`question::QuestionBatch`] — the raw student questions for one call
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod question;
