//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod conversation_logger;
pub mod faq_repository;
pub mod inbox;
pub mod progress;
pub mod text_generator;
