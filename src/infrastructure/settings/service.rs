//! Settings service: singleton read and upsert with asset replacement

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::domain::asset::AssetStore;
use crate::domain::settings::{CompanySettings, SettingsDraft, SettingsRepository};
use crate::domain::DomainError;

/// An uploaded logo image, not yet persisted
#[derive(Debug, Clone)]
pub struct UploadedAsset {
    /// Client-supplied file name; only its extension is kept
    pub file_name: String,
    pub data: Bytes,
}

/// Orchestrates reads of the singleton settings record and the
/// upsert-with-asset-replacement flow.
#[derive(Debug)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepository>,
    assets: Arc<dyn AssetStore>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepository>, assets: Arc<dyn AssetStore>) -> Self {
        Self { repository, assets }
    }

    /// Read the settings record. Pure read, no side effect.
    pub async fn get(&self) -> Result<Option<CompanySettings>, DomainError> {
        self.repository.get().await
    }

    /// Write the settings record, replacing the logo asset when a new one is
    /// supplied.
    ///
    /// Ordering invariant: the record never references an asset that has not
    /// been durably stored, and an old asset is deleted only after the record
    /// that stops referencing it has been committed. The deletion itself is
    /// fire-and-forget; a leaked file is acceptable, a dangling reference is
    /// not.
    pub async fn upsert(
        &self,
        draft: SettingsDraft,
        new_asset: Option<UploadedAsset>,
    ) -> Result<(), DomainError> {
        // Persist the asset before touching the record; an asset-store
        // failure aborts with no partial state.
        let new_logo = match new_asset {
            Some(asset) => Some(self.assets.save(&asset.file_name, asset.data).await?),
            None => None,
        };

        let previous_logo = match self.repository.get().await? {
            Some(current) => {
                // An absent new asset must never clear the existing reference
                self.repository.update(&draft, new_logo.as_deref()).await?;
                current.logo_url
            }
            None => {
                let settings = draft.clone().into_settings(new_logo.clone());

                match self.repository.insert(&settings).await {
                    Ok(()) => None,
                    // Lost a concurrent first-write race on the singleton
                    // key; the row exists now, so fall back to the update
                    // path, re-reading to capture the previous reference.
                    Err(e) if e.is_conflict() => {
                        let previous = self.repository.get().await?.and_then(|s| s.logo_url);
                        self.repository.update(&draft, new_logo.as_deref()).await?;
                        previous
                    }
                    Err(e) => return Err(e),
                }
            }
        };

        // Only after the record write committed, and only when a new asset
        // actually displaced an older one.
        if let (Some(new_logo), Some(previous)) = (new_logo, previous_logo) {
            if previous != new_logo {
                self.dispatch_cleanup(previous);
            }
        }

        Ok(())
    }

    /// Best-effort removal of a no-longer-referenced asset. Failures feed
    /// observability only, never the caller's result.
    fn dispatch_cleanup(&self, reference: String) {
        let assets = Arc::clone(&self.assets);

        tokio::spawn(async move {
            match assets.delete(&reference).await {
                Ok(()) => debug!(%reference, "Removed unreferenced logo asset"),
                Err(e) => warn!(%reference, error = %e, "Failed to remove old logo asset"),
            }
        });
    }
}
