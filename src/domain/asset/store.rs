//! Asset store trait

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Store for uploaded binary assets.
///
/// `save` persists the bytes under a collision-resistant name and returns the
/// public reference path the asset is served from. The reference is stable
/// for the lifetime of the file.
#[async_trait]
pub trait AssetStore: Send + Sync + Debug {
    /// Persist an uploaded file; `original_name` supplies the extension
    async fn save(&self, original_name: &str, data: Bytes) -> Result<String, DomainError>;

    /// Remove the file behind a reference previously returned by `save`
    async fn delete(&self, reference: &str) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// In-memory asset store for testing
    #[derive(Debug, Default)]
    pub struct MockAssetStore {
        files: Arc<RwLock<HashMap<String, Bytes>>>,
        deleted: Arc<RwLock<Vec<String>>>,
        fail_saves: Arc<RwLock<bool>>,
    }

    impl MockAssetStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make subsequent saves fail
        pub async fn set_fail_saves(&self, fail: bool) {
            *self.fail_saves.write().await = fail;
        }

        /// Whether a reference is still retrievable
        pub async fn contains(&self, reference: &str) -> bool {
            self.files.read().await.contains_key(reference)
        }

        /// References passed to `delete` so far
        pub async fn deleted(&self) -> Vec<String> {
            self.deleted.read().await.clone()
        }
    }

    #[async_trait]
    impl AssetStore for MockAssetStore {
        async fn save(&self, original_name: &str, data: Bytes) -> Result<String, DomainError> {
            if *self.fail_saves.read().await {
                return Err(DomainError::storage("Mock asset store configured to fail"));
            }

            let reference = format!("/uploads/{}-{}", Uuid::new_v4(), original_name);
            self.files.write().await.insert(reference.clone(), data);
            Ok(reference)
        }

        async fn delete(&self, reference: &str) -> Result<(), DomainError> {
            self.deleted.write().await.push(reference.to_string());

            match self.files.write().await.remove(reference) {
                Some(_) => Ok(()),
                None => Err(DomainError::not_found(format!(
                    "No asset at '{}'",
                    reference
                ))),
            }
        }
    }
}
