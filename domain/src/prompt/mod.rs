//! Prompt domain
//!
//! Templates for the instruction sent to the generative backend.

mod template;

pub use template::FaqPromptTemplate;
