//! Filesystem attachment store

use crate::domain::store::AttachmentStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Stores attachment bytes as plain files under an uploads root.
///
/// Callers pass UUID-derived relative names, so the layout stays one
/// directory per work order with one file per attachment.
pub struct FsAttachmentStore {
    root: PathBuf,
}

impl FsAttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AttachmentStore for FsAttachmentStore {
    async fn save(&self, relative_name: &str, bytes: &[u8]) -> Result<String> {
        let path = self.root.join(relative_name);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("write {}", path.display()))?;
        Ok(relative_name.to_string())
    }

    async fn load(&self, stored_path: &str) -> Result<Vec<u8>> {
        let path = self.root.join(stored_path);
        tokio::fs::read(&path)
            .await
            .with_context(|| format!("read {}", path.display()))
    }

    async fn remove(&self, stored_path: &str) -> Result<()> {
        let path = self.root.join(stored_path);
        tokio::fs::remove_file(&path)
            .await
            .with_context(|| format!("remove {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_load_remove_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsAttachmentStore::new(dir.path());

        let stored = store
            .save("some-order/some-file", b"drawing bytes")
            .await
            .expect("save");
        assert_eq!(stored, "some-order/some-file");

        let bytes = store.load(&stored).await.expect("load");
        assert_eq!(bytes, b"drawing bytes");

        store.remove(&stored).await.expect("remove");
        assert!(store.load(&stored).await.is_err());
    }
}
