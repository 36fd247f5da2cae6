//! Teacher inboxes persisted in `users.json`
//!
//! The file holds an array of user records, each with an `email`, a `role`
//! and a `notifications` array. Fields this adapter does not know about are
//! preserved on rewrite.

use super::{read_json, write_json_atomic};
use async_trait::async_trait;
use campus_application::ports::faq_repository::RepositoryError;
use campus_application::ports::inbox::InboxSource;
use campus_domain::Notification;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

pub const USERS_FILE: &str = "users.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserRecord {
    email: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    notifications: Vec<Notification>,
    #[serde(flatten)]
    extra: serde_json::Map<String, serde_json::Value>,
}

/// [`InboxSource`] over the users file
pub struct JsonInbox {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonInbox {
    /// Inbox at `<data_dir>/users.json`
    pub fn new(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(USERS_FILE))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<UserRecord>, RepositoryError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }
}

fn find_teacher<'a>(
    users: &'a mut [UserRecord],
    email: &str,
) -> Result<&'a mut UserRecord, RepositoryError> {
    users
        .iter_mut()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.role == "teacher")
        .ok_or_else(|| RepositoryError::NotFound(format!("teacher {}", email)))
}

#[async_trait]
impl InboxSource for JsonInbox {
    async fn notifications(
        &self,
        teacher_email: &str,
    ) -> Result<Vec<Notification>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut users = self.load().await?;
        let teacher = find_teacher(&mut users, teacher_email)?;

        let mut notifications = std::mem::take(&mut teacher.notifications);
        notifications.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(notifications)
    }

    async fn push(
        &self,
        recipient_email: &str,
        mut notification: Notification,
    ) -> Result<Notification, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut users = self.load().await?;
        let recipient = users
            .iter_mut()
            .find(|u| u.email.eq_ignore_ascii_case(recipient_email))
            .ok_or_else(|| RepositoryError::NotFound(format!("user {}", recipient_email)))?;

        let base = notification.id.clone();
        let mut suffix = 1;
        while recipient.notifications.iter().any(|n| n.id == notification.id) {
            notification.id = format!("{}-{}", base, suffix);
            suffix += 1;
        }

        recipient.notifications.insert(0, notification.clone());
        write_json_atomic(&self.path, &users).await?;
        debug!(id = %notification.id, to = %recipient_email, "Delivered notification");
        Ok(notification)
    }

    async fn mark_read(
        &self,
        teacher_email: &str,
        ids: &[String],
    ) -> Result<usize, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut users = self.load().await?;
        let teacher = find_teacher(&mut users, teacher_email)?;

        let mut changed = 0;
        for notification in teacher.notifications.iter_mut() {
            if !notification.read && ids.contains(&notification.id) {
                notification.read = true;
                changed += 1;
            }
        }

        if changed > 0 {
            write_json_atomic(&self.path, &users).await?;
        }
        debug!(teacher = %teacher_email, changed, "Marked notifications read");
        Ok(changed)
    }
}
