//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod consolidate_faqs;
pub mod generate_from_inbox;
pub mod inbox_messages;
pub mod manage_faqs;
