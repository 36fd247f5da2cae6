//! Published FAQ records kept in the durable FAQ store

use crate::core::error::DomainError;
use crate::faq::entities::FaqItem;
use serde::{Deserialize, Serialize};

/// Minimum question length for a manually entered FAQ
pub const MIN_QUESTION_CHARS: usize = 5;

/// Minimum answer length for a manually entered FAQ
pub const MIN_ANSWER_CHARS: usize = 10;

/// Identifier of a stored FAQ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaqId(String);

impl FaqId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an id from a creation timestamp and a per-store sequence number
    pub fn generate(timestamp_millis: i64, seq: u64) -> Self {
        Self(format!("faq-{}-{}", timestamp_millis, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FaqId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for FaqId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Err(DomainError::InvalidFaqId(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

/// Content for creating or replacing a stored FAQ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqDraft {
    pub question: String,
    pub answer: String,
}

impl FaqDraft {
    /// Draft with the store's minimum rule: both fields non-blank
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, DomainError> {
        let (question, answer) = FaqItem::try_new(question, answer)?.into_parts();
        Ok(Self { question, answer })
    }

    /// Draft typed in by a teacher, subject to the editor's length rules.
    ///
    /// Lengths count every character as typed, surrounding whitespace
    /// included; only an all-blank field is rejected outright.
    pub fn manual(question: impl Into<String>, answer: impl Into<String>) -> Result<Self, DomainError> {
        let draft = Self::new(question, answer)?;
        if draft.question.chars().count() < MIN_QUESTION_CHARS {
            return Err(DomainError::QuestionTooShort {
                min: MIN_QUESTION_CHARS,
            });
        }
        if draft.answer.chars().count() < MIN_ANSWER_CHARS {
            return Err(DomainError::AnswerTooShort {
                min: MIN_ANSWER_CHARS,
            });
        }
        Ok(draft)
    }
}

impl From<FaqItem> for FaqDraft {
    fn from(item: FaqItem) -> Self {
        let (question, answer) = item.into_parts();
        Self { question, answer }
    }
}

/// An FAQ that has been published to students (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFaq {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}

impl StoredFaq {
    pub fn from_draft(id: FaqId, draft: FaqDraft) -> Self {
        Self {
            id,
            question: draft.question,
            answer: draft.answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_format() {
        assert_eq!(FaqId::generate(1700000000000, 3).as_str(), "faq-1700000000000-3");
    }

    #[test]
    fn test_parse_id() {
        let id: FaqId = "faq-1".parse().unwrap();
        assert_eq!(id.to_string(), "faq-1");
        assert!("  ".parse::<FaqId>().is_err());
    }

    #[test]
    fn test_draft_rejects_blank() {
        assert_eq!(FaqDraft::new(" ", "answer").unwrap_err(), DomainError::EmptyQuestion);
    }

    #[test]
    fn test_manual_draft_length_rules() {
        assert_eq!(
            FaqDraft::manual("Why?", "Because the schedule says so.").unwrap_err(),
            DomainError::QuestionTooShort { min: 5 }
        );
        assert_eq!(
            FaqDraft::manual("Where is room 4?", "Upstairs.").unwrap_err(),
            DomainError::AnswerTooShort { min: 10 }
        );
        assert!(FaqDraft::manual("Where is room 4?", "On the second floor.").is_ok());
    }

    #[test]
    fn test_manual_draft_counts_raw_length() {
        // Padding counts toward the minimum, as in the editor form
        assert!(FaqDraft::manual(" Why?", "  Upstairs.").is_ok());
        assert_eq!(
            FaqDraft::manual("Why?", "Upstairs.").unwrap_err(),
            DomainError::QuestionTooShort { min: 5 }
        );
        assert_eq!(FaqDraft::manual("     ", "Long enough answer.").unwrap_err(), DomainError::EmptyQuestion);
    }

    #[test]
    fn test_draft_from_generated_item() {
        let item = FaqItem::try_new("Q?", "A.").unwrap();
        let draft = FaqDraft::from(item);
        assert_eq!(draft.question, "Q?");
        assert_eq!(draft.answer, "A.");
    }
}
