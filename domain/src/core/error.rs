//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("FAQ question cannot be empty")]
    EmptyQuestion,

    #[error("FAQ answer cannot be empty")]
    EmptyAnswer,

    #[error("Question must be at least {min} characters")]
    QuestionTooShort { min: usize },

    #[error("Answer must be at least {min} characters")]
    AnswerTooShort { min: usize },

    #[error("Invalid FAQ id: {0}")]
    InvalidFaqId(String),

    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}
