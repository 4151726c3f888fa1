//! Local filesystem asset store

use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::domain::asset::AssetStore;
use crate::domain::DomainError;

/// Asset store writing uploads to a local directory and serving them under a
/// public prefix.
///
/// Files get a collision-resistant uuid name, keeping only the original
/// extension. References look like `/uploads/<uuid>.png` and map back to
/// `<upload_dir>/<uuid>.png`.
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    upload_dir: PathBuf,
    public_prefix: String,
}

impl LocalAssetStore {
    pub fn new(upload_dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            public_prefix: public_prefix.into(),
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn file_name_for(&self, original_name: &str) -> String {
        match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        }
    }

    fn path_for(&self, reference: &str) -> Result<PathBuf, DomainError> {
        let name = reference
            .strip_prefix(&self.public_prefix)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(|| {
                DomainError::validation(format!("'{}' is not an asset reference", reference))
            })?;

        // A reference names exactly one file under the upload dir
        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(DomainError::validation(format!(
                "'{}' is not an asset reference",
                reference
            )));
        }

        Ok(self.upload_dir.join(name))
    }
}

#[async_trait]
impl AssetStore for LocalAssetStore {
    async fn save(&self, original_name: &str, data: Bytes) -> Result<String, DomainError> {
        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create upload dir: {}", e)))?;

        let file_name = self.file_name_for(original_name);
        let path = self.upload_dir.join(&file_name);

        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to write asset: {}", e)))?;

        Ok(format!("{}/{}", self.public_prefix, file_name))
    }

    async fn delete(&self, reference: &str) -> Result<(), DomainError> {
        let path = self.path_for(reference)?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete asset: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store(dir: &Path) -> LocalAssetStore {
        LocalAssetStore::new(dir, "/uploads")
    }

    #[tokio::test]
    async fn test_save_returns_public_reference() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        let reference = store
            .save("logo.png", Bytes::from_static(b"\x89PNG"))
            .await
            .unwrap();

        assert!(reference.starts_with("/uploads/"));
        assert!(reference.ends_with(".png"));

        let on_disk = dir.path().join(reference.strip_prefix("/uploads/").unwrap());
        assert_eq!(std::fs::read(on_disk).unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_saved_names_do_not_collide() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        let a = store.save("logo.png", Bytes::new()).await.unwrap();
        let b = store.save("logo.png", Bytes::new()).await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        let reference = store.save("logo.png", Bytes::new()).await.unwrap();
        store.delete(&reference).await.unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        let result = store.delete("/uploads/nope.png").await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_delete_rejects_foreign_references() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        assert!(store.delete("/etc/passwd").await.is_err());
        assert!(store.delete("/uploads/../escape").await.is_err());
        assert!(store.delete("/uploads/a/b").await.is_err());
    }

    #[tokio::test]
    async fn test_save_without_extension() {
        let dir = tempdir().unwrap();
        let store = store(dir.path());

        let reference = store.save("logo", Bytes::new()).await.unwrap();
        assert!(!reference.ends_with('.'));
        store.delete(&reference).await.unwrap();
    }
}
