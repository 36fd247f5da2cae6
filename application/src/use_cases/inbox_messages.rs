//! Inbox messaging use case
//!
//! Students ask a teacher a question, which lands at the top of the
//! teacher's inbox. A teacher replies to one of those messages: the answer
//! goes to the student's inbox with a `Re: ` prefix and the question is
//! marked read.

use crate::ports::faq_repository::RepositoryError;
use crate::ports::inbox::InboxSource;
use campus_domain::{DomainError, InboxFilter, Notification};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while sending inbox messages
#[derive(Error, Debug)]
pub enum InboxMessagesError {
    #[error("Invalid message: {0}")]
    Invalid(#[from] DomainError),

    #[error("Message not found: {0}")]
    MessageNotFound(String),

    #[error("Inbox error: {0}")]
    Inbox(#[from] RepositoryError),
}

/// A delivered message and whose inbox it landed in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentMessage {
    pub to: String,
    pub notification: Notification,
}

/// Use case for reading and sending inbox messages
#[derive(Clone)]
pub struct InboxMessagesUseCase {
    inbox: Arc<dyn InboxSource>,
}

impl InboxMessagesUseCase {
    pub fn new(inbox: Arc<dyn InboxSource>) -> Self {
        Self { inbox }
    }

    /// A teacher's inbox, newest first
    pub async fn list(
        &self,
        teacher_email: &str,
        filter: InboxFilter,
    ) -> Result<Vec<Notification>, InboxMessagesError> {
        let notifications = self.inbox.notifications(teacher_email).await?;
        Ok(notifications
            .into_iter()
            .filter(|n| filter.matches(n))
            .collect())
    }

    /// Send a student's question to a teacher
    pub async fn ask(
        &self,
        student_email: &str,
        teacher_email: &str,
        question: &str,
    ) -> Result<SentMessage, InboxMessagesError> {
        let notification = Notification::question(student_email, question, Utc::now())?;
        let sent = self.inbox.push(teacher_email, notification).await?;
        info!(id = %sent.id, teacher = %teacher_email, "Question sent");
        Ok(SentMessage {
            to: teacher_email.to_string(),
            notification: sent,
        })
    }

    /// Answer a message in a teacher's inbox and mark it read
    pub async fn reply(
        &self,
        teacher_email: &str,
        notification_id: &str,
        message: &str,
    ) -> Result<SentMessage, InboxMessagesError> {
        let original = self
            .inbox
            .notifications(teacher_email)
            .await?
            .into_iter()
            .find(|n| n.id == notification_id)
            .ok_or_else(|| InboxMessagesError::MessageNotFound(notification_id.to_string()))?;

        let reply = original.reply(teacher_email, message, Utc::now())?;
        let sent = self.inbox.push(&original.from, reply).await?;
        self.inbox
            .mark_read(teacher_email, std::slice::from_ref(&original.id))
            .await?;

        info!(id = %sent.id, to = %original.from, "Reply sent");
        Ok(SentMessage {
            to: original.from,
            notification: sent,
        })
    }
}
