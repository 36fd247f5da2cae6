//! JSON-file backed stores
//!
//! Both stores keep their whole collection in one JSON document under the
//! data directory and rewrite it atomically on every change.

mod faq_store;
mod inbox;

pub use faq_store::JsonFaqStore;
pub use inbox::JsonInbox;

use campus_application::ports::faq_repository::RepositoryError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON document; a missing file yields `None`
pub(crate) async fn read_json<T: DeserializeOwned>(
    path: &Path,
) -> Result<Option<T>, RepositoryError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(RepositoryError::Io(format!("{}: {}", path.display(), e))),
    };
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|e| RepositoryError::Corrupt(format!("{}: {}", path.display(), e)))
}

/// Write a JSON document via a temp file and rename
pub(crate) async fn write_json_atomic<T: Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), RepositoryError> {
    let io_err = |e: std::io::Error| RepositoryError::Io(format!("{}: {}", path.display(), e));

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let json = serde_json::to_vec_pretty(value)
        .map_err(|e| RepositoryError::Corrupt(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)
}
