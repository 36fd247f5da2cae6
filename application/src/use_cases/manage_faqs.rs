//! Manage FAQs use case
//!
//! Manual create/edit/delete of published FAQs, with the same form rules
//! the FAQ editor applies (minimum question and answer lengths).

use crate::ports::faq_repository::{FaqRepository, RepositoryError};
use campus_domain::{DomainError, FaqDraft, FaqId, StoredFaq};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while managing FAQs
#[derive(Error, Debug)]
pub enum ManageFaqsError {
    #[error("Invalid FAQ: {0}")]
    Invalid(#[from] DomainError),

    #[error("FAQ not found: {0}")]
    NotFound(FaqId),

    #[error("Storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for manual FAQ management
#[derive(Clone)]
pub struct ManageFaqsUseCase {
    repository: Arc<dyn FaqRepository>,
}

impl ManageFaqsUseCase {
    pub fn new(repository: Arc<dyn FaqRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<StoredFaq>, ManageFaqsError> {
        Ok(self.repository.list().await?)
    }

    pub async fn add(&self, question: &str, answer: &str) -> Result<StoredFaq, ManageFaqsError> {
        let draft = FaqDraft::manual(question, answer)?;
        let faq = self.repository.create(draft).await?;
        info!(id = %faq.id, "FAQ added");
        Ok(faq)
    }

    pub async fn update(
        &self,
        id: &FaqId,
        question: &str,
        answer: &str,
    ) -> Result<StoredFaq, ManageFaqsError> {
        let draft = FaqDraft::manual(question, answer)?;
        match self.repository.update(id, draft).await {
            Ok(faq) => {
                info!(id = %faq.id, "FAQ updated");
                Ok(faq)
            }
            Err(RepositoryError::NotFound(_)) => Err(ManageFaqsError::NotFound(id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, id: &FaqId) -> Result<(), ManageFaqsError> {
        if !self.repository.delete(id).await? {
            return Err(ManageFaqsError::NotFound(id.clone()));
        }
        info!(id = %id, "FAQ deleted");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Vec-backed FAQ store
    #[derive(Default)]
    pub(crate) struct InMemoryFaqRepository {
        pub(crate) faqs: Mutex<Vec<StoredFaq>>,
        /// Writes that would grow the store past this many FAQs fail
        capacity: Option<usize>,
    }

    impl InMemoryFaqRepository {
        /// Store that runs out of space after `capacity` FAQs
        pub(crate) fn failing_after(capacity: usize) -> Self {
            Self {
                faqs: Mutex::new(Vec::new()),
                capacity: Some(capacity),
            }
        }
    }

    #[async_trait]
    impl FaqRepository for InMemoryFaqRepository {
        async fn list(&self) -> Result<Vec<StoredFaq>, RepositoryError> {
            Ok(self.faqs.lock().unwrap().clone())
        }

        async fn create(&self, draft: FaqDraft) -> Result<StoredFaq, RepositoryError> {
            let mut created = self.create_many(vec![draft]).await?;
            Ok(created.remove(0))
        }

        async fn create_many(
            &self,
            drafts: Vec<FaqDraft>,
        ) -> Result<Vec<StoredFaq>, RepositoryError> {
            let mut faqs = self.faqs.lock().unwrap();
            if let Some(capacity) = self.capacity
                && faqs.len() + drafts.len() > capacity
            {
                return Err(RepositoryError::Io("disk full".to_string()));
            }
            let start = faqs.len();
            let created: Vec<StoredFaq> = drafts
                .into_iter()
                .enumerate()
                .map(|(i, draft)| StoredFaq::from_draft(FaqId::generate(0, (start + i) as u64), draft))
                .collect();
            faqs.extend(created.iter().cloned());
            Ok(created)
        }

        async fn update(&self, id: &FaqId, draft: FaqDraft) -> Result<StoredFaq, RepositoryError> {
            let mut faqs = self.faqs.lock().unwrap();
            let faq = faqs
                .iter_mut()
                .find(|f| &f.id == id)
                .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
            *faq = StoredFaq::from_draft(id.clone(), draft);
            Ok(faq.clone())
        }

        async fn delete(&self, id: &FaqId) -> Result<bool, RepositoryError> {
            let mut faqs = self.faqs.lock().unwrap();
            let before = faqs.len();
            faqs.retain(|f| &f.id != id);
            Ok(faqs.len() != before)
        }
    }

    fn use_case() -> (ManageFaqsUseCase, Arc<InMemoryFaqRepository>) {
        let repository = Arc::new(InMemoryFaqRepository::default());
        (ManageFaqsUseCase::new(repository.clone()), repository)
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (use_case, _) = use_case();

        let faq = use_case
            .add("Where is the library?", "In the main building, first floor.")
            .await
            .unwrap();
        let faqs = use_case.list().await.unwrap();

        assert_eq!(faqs, vec![faq]);
    }

    #[tokio::test]
    async fn test_add_enforces_form_rules() {
        let (use_case, repository) = use_case();

        let err = use_case.add("Why?", "Because it is on the syllabus.").await.unwrap_err();
        assert!(matches!(
            err,
            ManageFaqsError::Invalid(DomainError::QuestionTooShort { min: 5 })
        ));

        let err = use_case.add("Is there a lab?", "Yes.").await.unwrap_err();
        assert!(matches!(
            err,
            ManageFaqsError::Invalid(DomainError::AnswerTooShort { min: 10 })
        ));

        assert!(repository.faqs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_existing() {
        let (use_case, _) = use_case();
        let faq = use_case
            .add("Where is the library?", "In the main building.")
            .await
            .unwrap();

        let updated = use_case
            .update(&faq.id, "Where is the library?", "In the new east wing.")
            .await
            .unwrap();

        assert_eq!(updated.id, faq.id);
        assert_eq!(updated.answer, "In the new east wing.");
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let (use_case, _) = use_case();
        let err = use_case
            .update(&FaqId::new("faq-missing"), "Where is it?", "Somewhere on campus.")
            .await
            .unwrap_err();
        assert!(matches!(err, ManageFaqsError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete() {
        let (use_case, _) = use_case();
        let faq = use_case
            .add("Where is the library?", "In the main building.")
            .await
            .unwrap();

        use_case.delete(&faq.id).await.unwrap();
        assert!(use_case.list().await.unwrap().is_empty());

        let err = use_case.delete(&faq.id).await.unwrap_err();
        assert!(matches!(err, ManageFaqsError::NotFound(_)));
    }
}
