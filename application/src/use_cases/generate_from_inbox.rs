//! Generate FAQs from a teacher's inbox.
//!
//! Collects the questions students sent to a teacher, consolidates them,
//! and optionally publishes the resulting FAQs and marks the consumed
//! messages as read.

use crate::ports::faq_repository::{FaqRepository, RepositoryError};
use crate::ports::inbox::InboxSource;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::consolidate_faqs::{ConsolidateError, ConsolidateFaqsUseCase};
use campus_domain::{FaqDraft, FaqResult, InboxFilter, QuestionBatch, StoredFaq};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while generating FAQs from an inbox
#[derive(Error, Debug)]
pub enum GenerateFromInboxError {
    #[error("Inbox error: {0}")]
    Inbox(RepositoryError),

    #[error(transparent)]
    Consolidate(#[from] ConsolidateError),

    #[error("Could not publish FAQs: {0}")]
    Publish(RepositoryError),
}

/// Input for the [`GenerateFromInboxUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateFromInboxInput {
    pub teacher_email: String,
    pub filter: InboxFilter,
    /// Write every generated FAQ to the FAQ store
    pub publish: bool,
    /// Mark the consumed messages read once consolidation succeeded
    pub mark_read: bool,
}

impl GenerateFromInboxInput {
    pub fn new(teacher_email: impl Into<String>) -> Self {
        Self {
            teacher_email: teacher_email.into(),
            filter: InboxFilter::default(),
            publish: false,
            mark_read: false,
        }
    }

    pub fn with_filter(mut self, filter: InboxFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn publishing(mut self) -> Self {
        self.publish = true;
        self
    }

    pub fn marking_read(mut self) -> Self {
        self.mark_read = true;
        self
    }
}

/// Output of the [`GenerateFromInboxUseCase`].
#[derive(Debug, Clone, Serialize)]
pub struct GenerateFromInboxOutput {
    /// Messages that were fed to consolidation, in inbox order
    pub questions: Vec<String>,
    pub result: FaqResult,
    /// FAQs written to the store (empty unless publishing)
    pub published: Vec<StoredFaq>,
    /// Number of messages flagged read
    pub marked_read: usize,
}

/// Use case tying the inbox, the consolidator and the FAQ store together
#[derive(Clone)]
pub struct GenerateFromInboxUseCase {
    inbox: Arc<dyn InboxSource>,
    consolidator: ConsolidateFaqsUseCase,
    repository: Arc<dyn FaqRepository>,
}

impl GenerateFromInboxUseCase {
    pub fn new(
        inbox: Arc<dyn InboxSource>,
        consolidator: ConsolidateFaqsUseCase,
        repository: Arc<dyn FaqRepository>,
    ) -> Self {
        Self {
            inbox,
            consolidator,
            repository,
        }
    }

    pub async fn execute(
        &self,
        input: GenerateFromInboxInput,
    ) -> Result<GenerateFromInboxOutput, GenerateFromInboxError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: GenerateFromInboxInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<GenerateFromInboxOutput, GenerateFromInboxError> {
        let notifications = self
            .inbox
            .notifications(&input.teacher_email)
            .await
            .map_err(GenerateFromInboxError::Inbox)?;

        let (ids, questions): (Vec<String>, Vec<String>) = notifications
            .into_iter()
            .filter(|n| input.filter.matches(n))
            .map(|n| (n.id, n.message))
            .unzip();

        info!(
            teacher = %input.teacher_email,
            questions = questions.len(),
            "Collected inbox questions"
        );

        let result = self
            .consolidator
            .consolidate_with_progress(QuestionBatch::new(questions.iter().cloned()), progress)
            .await?;

        let published = if input.publish && !result.is_empty() {
            let drafts = result.iter().cloned().map(FaqDraft::from).collect();
            let published = self
                .repository
                .create_many(drafts)
                .await
                .map_err(GenerateFromInboxError::Publish)?;
            info!(count = published.len(), "Published generated FAQs");
            published
        } else {
            Vec::new()
        };

        let marked_read = if input.mark_read && !ids.is_empty() {
            self.inbox
                .mark_read(&input.teacher_email, &ids)
                .await
                .map_err(GenerateFromInboxError::Inbox)?
        } else {
            0
        };

        Ok(GenerateFromInboxOutput {
            questions,
            result,
            published,
            marked_read,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::text_generator::GenerationError;
    use crate::use_cases::consolidate_faqs::tests::MockGenerator;
    use crate::use_cases::manage_faqs::tests::InMemoryFaqRepository;
    use async_trait::async_trait;
    use campus_domain::Notification;
    use chrono::Utc;
    use serde_json::json;
    use std::sync::Mutex;

    struct InMemoryInbox {
        teacher: String,
        notifications: Mutex<Vec<Notification>>,
    }

    impl InMemoryInbox {
        fn new(messages: &[(&str, bool)]) -> Self {
            let notifications = messages
                .iter()
                .enumerate()
                .map(|(i, (message, read))| Notification {
                    id: format!("notif{}", i),
                    from: "student@test.com".to_string(),
                    message: message.to_string(),
                    date: Utc::now(),
                    read: *read,
                })
                .collect();
            Self {
                teacher: "teacher@test.com".to_string(),
                notifications: Mutex::new(notifications),
            }
        }

        fn read_ids(&self) -> Vec<String> {
            self.notifications
                .lock()
                .unwrap()
                .iter()
                .filter(|n| n.read)
                .map(|n| n.id.clone())
                .collect()
        }
    }

    #[async_trait]
    impl InboxSource for InMemoryInbox {
        async fn notifications(
            &self,
            teacher_email: &str,
        ) -> Result<Vec<Notification>, RepositoryError> {
            if teacher_email != self.teacher {
                return Err(RepositoryError::NotFound(teacher_email.to_string()));
            }
            Ok(self.notifications.lock().unwrap().clone())
        }

        async fn push(
            &self,
            _recipient_email: &str,
            notification: Notification,
        ) -> Result<Notification, RepositoryError> {
            self.notifications.lock().unwrap().insert(0, notification.clone());
            Ok(notification)
        }

        async fn mark_read(
            &self,
            _teacher_email: &str,
            ids: &[String],
        ) -> Result<usize, RepositoryError> {
            let mut count = 0;
            for n in self.notifications.lock().unwrap().iter_mut() {
                if ids.contains(&n.id) && !n.read {
                    n.read = true;
                    count += 1;
                }
            }
            Ok(count)
        }
    }

    struct Fixture {
        use_case: GenerateFromInboxUseCase,
        generator: Arc<MockGenerator>,
        inbox: Arc<InMemoryInbox>,
        repository: Arc<InMemoryFaqRepository>,
    }

    fn fixture(messages: &[(&str, bool)], generator: MockGenerator) -> Fixture {
        fixture_with_repository(messages, generator, InMemoryFaqRepository::default())
    }

    fn fixture_with_repository(
        messages: &[(&str, bool)],
        generator: MockGenerator,
        repository: InMemoryFaqRepository,
    ) -> Fixture {
        let generator = Arc::new(generator);
        let inbox = Arc::new(InMemoryInbox::new(messages));
        let repository = Arc::new(repository);
        let use_case = GenerateFromInboxUseCase::new(
            inbox.clone(),
            ConsolidateFaqsUseCase::new(generator.clone()),
            repository.clone(),
        );
        Fixture {
            use_case,
            generator,
            inbox,
            repository,
        }
    }

    fn two_faqs() -> serde_json::Value {
        json!({
            "faqs": [
                {"question": "When is the deadline?", "answer": "Friday at 5pm."},
                {"question": "Where is the exam?", "answer": "Hall B."}
            ]
        })
    }

    #[tokio::test]
    async fn test_unread_only_by_default() {
        let f = fixture(
            &[("When is the deadline?", false), ("Old question?", true)],
            MockGenerator::returning(two_faqs()),
        );

        let output = f
            .use_case
            .execute(GenerateFromInboxInput::new("teacher@test.com"))
            .await
            .unwrap();

        assert_eq!(output.questions, vec!["When is the deadline?".to_string()]);
        assert_eq!(output.result.len(), 2);
        assert!(output.published.is_empty());
        assert_eq!(output.marked_read, 0);
        let prompts = f.generator.prompts.lock().unwrap();
        assert!(!prompts[0].contains("Old question?"));
    }

    #[tokio::test]
    async fn test_all_filter_includes_read_messages() {
        let f = fixture(
            &[("New?", false), ("Old?", true)],
            MockGenerator::returning(two_faqs()),
        );

        let output = f
            .use_case
            .execute(GenerateFromInboxInput::new("teacher@test.com").with_filter(InboxFilter::All))
            .await
            .unwrap();

        assert_eq!(output.questions, vec!["New?".to_string(), "Old?".to_string()]);
    }

    #[tokio::test]
    async fn test_publish_and_mark_read() {
        let f = fixture(
            &[("Deadline?", false), ("Exam room?", false)],
            MockGenerator::returning(two_faqs()),
        );

        let output = f
            .use_case
            .execute(
                GenerateFromInboxInput::new("teacher@test.com")
                    .publishing()
                    .marking_read(),
            )
            .await
            .unwrap();

        assert_eq!(output.published.len(), 2);
        assert_eq!(output.published[0].question, "When is the deadline?");
        assert_eq!(f.repository.faqs.lock().unwrap().len(), 2);
        assert_eq!(output.marked_read, 2);
        assert_eq!(f.inbox.read_ids(), vec!["notif0".to_string(), "notif1".to_string()]);
    }

    #[tokio::test]
    async fn test_empty_inbox_skips_backend() {
        let f = fixture(&[("Already handled?", true)], MockGenerator::new(vec![]));

        let output = f
            .use_case
            .execute(GenerateFromInboxInput::new("teacher@test.com").marking_read())
            .await
            .unwrap();

        assert!(output.questions.is_empty());
        assert!(output.result.is_empty());
        assert_eq!(output.marked_read, 0);
        assert_eq!(f.generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_leaves_inbox_untouched() {
        let f = fixture(
            &[("Deadline?", false)],
            MockGenerator::new(vec![Err(GenerationError::Timeout)]),
        );

        let err = f
            .use_case
            .execute(
                GenerateFromInboxInput::new("teacher@test.com")
                    .publishing()
                    .marking_read(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateFromInboxError::Consolidate(_)));
        assert!(f.inbox.read_ids().is_empty());
        assert!(f.repository.faqs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_publishes_nothing() {
        let f = fixture_with_repository(
            &[("Deadline?", false), ("Exam room?", false)],
            MockGenerator::returning(two_faqs()),
            InMemoryFaqRepository::failing_after(1),
        );

        let err = f
            .use_case
            .execute(
                GenerateFromInboxInput::new("teacher@test.com")
                    .publishing()
                    .marking_read(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateFromInboxError::Publish(RepositoryError::Io(_))
        ));
        assert!(f.repository.faqs.lock().unwrap().is_empty());
        assert!(f.inbox.read_ids().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_teacher() {
        let f = fixture(&[], MockGenerator::new(vec![]));

        let err = f
            .use_case
            .execute(GenerateFromInboxInput::new("nobody@test.com"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateFromInboxError::Inbox(RepositoryError::NotFound(_))
        ));
    }
}
