//! Inbox port
//!
//! Read access to the questions students sent to a teacher.

use super::faq_repository::RepositoryError;
use async_trait::async_trait;
use campus_domain::Notification;

/// Source of inbox notifications
#[async_trait]
pub trait InboxSource: Send + Sync {
    /// A teacher's inbox, newest first
    ///
    /// Returns [`RepositoryError::NotFound`] if the teacher is unknown.
    async fn notifications(&self, teacher_email: &str)
    -> Result<Vec<Notification>, RepositoryError>;

    /// Put a message at the top of a user's inbox.
    ///
    /// Any user can receive messages (students get replies). Returns
    /// [`RepositoryError::NotFound`] if no user has that email. The stored
    /// notification is returned; its id may differ from the given one if
    /// that id was already taken.
    async fn push(
        &self,
        recipient_email: &str,
        notification: Notification,
    ) -> Result<Notification, RepositoryError>;

    /// Flag the given notifications as read; unknown ids are ignored.
    ///
    /// Returns how many notifications changed state.
    async fn mark_read(&self, teacher_email: &str, ids: &[String])
    -> Result<usize, RepositoryError>;
}
