//! Inbox subdomain: questions students send to a teacher

use crate::core::error::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum length of a question a student sends
pub const MIN_ASK_CHARS: usize = 10;

/// Minimum length of a teacher's reply
pub const MIN_REPLY_CHARS: usize = 5;

/// Marks a message as an answer to an earlier one
pub const REPLY_PREFIX: &str = "Re: ";

/// A message in a teacher's inbox (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    /// Sender email
    pub from: String,
    pub message: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Unread message stamped with `date`; the id is derived from it
    pub fn new(from: impl Into<String>, message: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: format!("notif{}", date.timestamp_millis()),
            from: from.into(),
            message: message.into(),
            date,
            read: false,
        }
    }

    /// A student's question for a teacher's inbox
    pub fn question(
        student_email: impl Into<String>,
        question: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let question = validated_message(question.into(), MIN_ASK_CHARS)?;
        Ok(Self::new(student_email, question, date))
    }

    /// A teacher's answer to this message, addressed back to its sender
    pub fn reply(
        &self,
        teacher_email: impl Into<String>,
        message: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let message = validated_message(message.into(), MIN_REPLY_CHARS)?;
        Ok(Self::new(
            teacher_email,
            format!("{}{}", REPLY_PREFIX, message),
            date,
        ))
    }
}

fn validated_message(message: String, min: usize) -> Result<String, DomainError> {
    if message.trim().is_empty() {
        return Err(DomainError::EmptyMessage);
    }
    if message.chars().count() < min {
        return Err(DomainError::MessageTooShort { min });
    }
    Ok(message)
}

/// Which inbox messages to consolidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InboxFilter {
    /// Only messages the teacher has not read yet
    #[default]
    Unread,
    All,
}

impl InboxFilter {
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            InboxFilter::Unread => !notification.read,
            InboxFilter::All => true,
        }
    }
}
