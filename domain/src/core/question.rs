//! Question batch value object

use serde::{Deserialize, Serialize};

/// The raw questions submitted for one consolidation (Value Object)
///
/// Questions are kept verbatim and in submission order. Duplicates are
/// expected: grouping them is the whole point of consolidation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBatch {
    questions: Vec<String>,
}

impl QuestionBatch {
    /// Create a batch from the given questions, unchanged
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            questions: questions.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a batch from possibly absent input; `None` yields an empty batch
    pub fn from_optional(questions: Option<Vec<String>>) -> Self {
        Self {
            questions: questions.unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.questions
    }
}

impl From<Vec<String>> for QuestionBatch {
    fn from(questions: Vec<String>) -> Self {
        Self { questions }
    }
}

impl<'a> IntoIterator for &'a QuestionBatch {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}
