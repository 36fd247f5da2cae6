//! FAQ store persisted as `faqs.json`

use super::{read_json, write_json_atomic};
use async_trait::async_trait;
use campus_application::ports::faq_repository::{FaqRepository, RepositoryError};
use campus_domain::{FaqDraft, FaqId, StoredFaq};
use chrono::Utc;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tracing::debug;

pub const FAQ_FILE: &str = "faqs.json";

/// [`FaqRepository`] over a single JSON array file
pub struct JsonFaqStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles
    lock: Mutex<()>,
    seq: AtomicU64,
}

impl JsonFaqStore {
    /// Store at `<data_dir>/faqs.json`
    pub fn new(data_dir: &Path) -> Self {
        Self::at_path(data_dir.join(FAQ_FILE))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            seq: AtomicU64::new(0),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<StoredFaq>, RepositoryError> {
        Ok(read_json(&self.path).await?.unwrap_or_default())
    }

    fn next_id(&self, existing: &[StoredFaq]) -> FaqId {
        let now = Utc::now().timestamp_millis();
        loop {
            let id = FaqId::generate(now, self.seq.fetch_add(1, Ordering::Relaxed));
            if !existing.iter().any(|f| f.id == id) {
                return id;
            }
        }
    }
}

#[async_trait]
impl FaqRepository for JsonFaqStore {
    async fn list(&self) -> Result<Vec<StoredFaq>, RepositoryError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn create(&self, draft: FaqDraft) -> Result<StoredFaq, RepositoryError> {
        let mut created = self.create_many(vec![draft]).await?;
        created
            .pop()
            .ok_or_else(|| RepositoryError::Io("no FAQ was stored".to_string()))
    }

    async fn create_many(&self, drafts: Vec<FaqDraft>) -> Result<Vec<StoredFaq>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut faqs = self.load().await?;
        let first = faqs.len();
        for draft in drafts {
            let faq = StoredFaq::from_draft(self.next_id(&faqs), draft);
            faqs.push(faq);
        }
        // One write for the whole batch, so a failure leaves the file as it was
        write_json_atomic(&self.path, &faqs).await?;
        let created = faqs.split_off(first);
        debug!(count = created.len(), path = %self.path.display(), "Stored FAQs");
        Ok(created)
    }

    async fn update(&self, id: &FaqId, draft: FaqDraft) -> Result<StoredFaq, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut faqs = self.load().await?;
        let slot = faqs
            .iter_mut()
            .find(|f| &f.id == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))?;
        *slot = StoredFaq::from_draft(id.clone(), draft);
        let updated = slot.clone();
        write_json_atomic(&self.path, &faqs).await?;
        Ok(updated)
    }

    async fn delete(&self, id: &FaqId) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut faqs = self.load().await?;
        let before = faqs.len();
        faqs.retain(|f| &f.id != id);
        if faqs.len() == before {
            return Ok(false);
        }
        write_json_atomic(&self.path, &faqs).await?;
        Ok(true)
    }
}
