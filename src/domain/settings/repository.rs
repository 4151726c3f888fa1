//! Settings repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{CompanySettings, SettingsDraft};
use crate::domain::DomainError;

/// Repository trait for the singleton company-settings record.
///
/// The storage layer enforces uniqueness of the singleton key: a second
/// concurrent `insert` must fail with `DomainError::Conflict`, which callers
/// treat as "lost the first-write race" and fall back to `update`.
#[async_trait]
pub trait SettingsRepository: Send + Sync + Debug {
    /// Fetch the settings row, if it exists
    async fn get(&self) -> Result<Option<CompanySettings>, DomainError>;

    /// Insert the singleton row
    async fn insert(&self, settings: &CompanySettings) -> Result<(), DomainError>;

    /// Update the scalar fields in place; replace the logo reference only
    /// when `logo_url` is `Some`
    async fn update(
        &self,
        draft: &SettingsDraft,
        logo_url: Option<&str>,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory settings repository for testing
    #[derive(Debug, Default)]
    pub struct MockSettingsRepository {
        row: Arc<RwLock<Option<CompanySettings>>>,
    }

    impl MockSettingsRepository {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seed an existing row
        pub async fn seed(&self, settings: CompanySettings) {
            *self.row.write().await = Some(settings);
        }
    }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepository {
        async fn get(&self) -> Result<Option<CompanySettings>, DomainError> {
            Ok(self.row.read().await.clone())
        }

        async fn insert(&self, settings: &CompanySettings) -> Result<(), DomainError> {
            let mut row = self.row.write().await;

            if row.is_some() {
                return Err(DomainError::conflict("Settings row already exists"));
            }

            *row = Some(settings.clone());
            Ok(())
        }

        async fn update(
            &self,
            draft: &SettingsDraft,
            logo_url: Option<&str>,
        ) -> Result<(), DomainError> {
            let mut row = self.row.write().await;

            let current = row
                .as_mut()
                .ok_or_else(|| DomainError::not_found("Settings row does not exist"))?;

            current.company_name = draft.company_name.clone();
            current.header_color = draft.header_color.clone();
            current.footer_text = draft.footer_text.clone();
            current.footer_color = draft.footer_color.clone();

            if let Some(url) = logo_url {
                current.logo_url = Some(url.to_string());
            }

            Ok(())
        }
    }
}
