//! FAQ entities produced by consolidation

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A consolidated question with its generated answer (Value Object)
///
/// Both fields are guaranteed non-empty: whitespace-only text is rejected.
/// The text itself is kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFaqItem")]
pub struct FaqItem {
    question: String,
    answer: String,
}

impl FaqItem {
    /// Create a new item, validating that neither field is blank
    pub fn try_new(
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(DomainError::EmptyAnswer);
        }

        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Consume and return `(question, answer)`
    pub fn into_parts(self) -> (String, String) {
        (self.question, self.answer)
    }
}

#[derive(Deserialize)]
struct RawFaqItem {
    question: String,
    answer: String,
}

impl TryFrom<RawFaqItem> for FaqItem {
    type Error = DomainError;

    fn try_from(raw: RawFaqItem) -> Result<Self, Self::Error> {
        FaqItem::try_new(raw.question, raw.answer)
    }
}

/// The ordered list of FAQs produced by one consolidation
///
/// Order follows the thematic grouping chosen by the generator and carries
/// no further meaning. Serializes as `{"faqs": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqResult {
    faqs: Vec<FaqItem>,
}

impl FaqResult {
    pub fn new(faqs: Vec<FaqItem>) -> Self {
        Self { faqs }
    }

    /// The "no FAQs found" result
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    pub fn faqs(&self) -> &[FaqItem] {
        &self.faqs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FaqItem> {
        self.faqs.iter()
    }
}

impl<'a> IntoIterator for &'a FaqResult {
    type Item = &'a FaqItem;
    type IntoIter = std::slice::Iter<'a, FaqItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.faqs.iter()
    }
}
