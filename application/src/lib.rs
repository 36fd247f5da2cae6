//! Application layer for campus-faq
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    faq_repository::{FaqRepository, RepositoryError},
    inbox::InboxSource,
    progress::{NoProgress, ProgressNotifier},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::consolidate_faqs::{ConsolidateError, ConsolidateFaqsUseCase};
pub use use_cases::generate_from_inbox::{
    GenerateFromInboxError, GenerateFromInboxInput, GenerateFromInboxOutput,
    GenerateFromInboxUseCase,
};
pub use use_cases::inbox_messages::{InboxMessagesError, InboxMessagesUseCase, SentMessage};
pub use use_cases::manage_faqs::{ManageFaqsError, ManageFaqsUseCase};
