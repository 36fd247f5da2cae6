//! FAQ store port
//!
//! Durable storage for FAQs that a teacher has published.

use async_trait::async_trait;
use campus_domain::{FaqDraft, FaqId, StoredFaq};
use thiserror::Error;

/// Errors raised by store adapters (FAQ store and inbox)
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Corrupt data: {0}")]
    Corrupt(String),
}

/// Store of published FAQs
#[async_trait]
pub trait FaqRepository: Send + Sync {
    /// All FAQs in insertion order
    async fn list(&self) -> Result<Vec<StoredFaq>, RepositoryError>;

    /// Append a new FAQ and return it with its assigned id
    async fn create(&self, draft: FaqDraft) -> Result<StoredFaq, RepositoryError>;

    /// Append several FAQs in one write, keeping their order.
    ///
    /// Either every draft is stored or, on error, none is.
    async fn create_many(&self, drafts: Vec<FaqDraft>) -> Result<Vec<StoredFaq>, RepositoryError>;

    /// Replace the content of an existing FAQ
    ///
    /// Returns [`RepositoryError::NotFound`] for an unknown id.
    async fn update(&self, id: &FaqId, draft: FaqDraft) -> Result<StoredFaq, RepositoryError>;

    /// Remove an FAQ; returns whether it existed
    async fn delete(&self, id: &FaqId) -> Result<bool, RepositoryError>;
}
