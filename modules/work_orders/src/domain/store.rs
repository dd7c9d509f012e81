//! Attachment byte storage
//!
//! Rows describe attachments; the bytes themselves go through this trait
//! so the service never touches the filesystem directly.

use anyhow::Result;
use async_trait::async_trait;

/// Blob storage for attachment content.
///
/// `relative_name` is the path the caller wants the bytes under; the store
/// returns the path it actually stored them at, which is what gets persisted
/// on the attachment row and passed back to `load` and `remove`.
#[async_trait]
pub trait AttachmentStore: Send + Sync {
    async fn save(&self, relative_name: &str, bytes: &[u8]) -> Result<String>;

    async fn load(&self, stored_path: &str) -> Result<Vec<u8>>;

    async fn remove(&self, stored_path: &str) -> Result<()>;
}
