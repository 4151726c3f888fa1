//! PostgreSQL settings repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::settings::{CompanySettings, SettingsDraft, SettingsRepository, SETTINGS_ID};
use crate::domain::DomainError;

/// PostgreSQL implementation of SettingsRepository.
///
/// The `company_settings` primary key is fixed at [`SETTINGS_ID`], which is
/// what makes the singleton invariant hold under concurrent first-writes: the
/// second insert fails with a unique violation and is surfaced as `Conflict`.
#[derive(Debug, Clone)]
pub struct PostgresSettingsRepository {
    pool: PgPool,
}

impl PostgresSettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SettingsRepository for PostgresSettingsRepository {
    async fn get(&self) -> Result<Option<CompanySettings>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT company_name, header_color, footer_text, footer_color, logo_url
            FROM company_settings
            WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ID)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get settings: {}", e)))?;

        Ok(row.map(|row| CompanySettings {
            company_name: row.get("company_name"),
            header_color: row.get("header_color"),
            footer_text: row.get("footer_text"),
            footer_color: row.get("footer_color"),
            logo_url: row.get("logo_url"),
        }))
    }

    async fn insert(&self, settings: &CompanySettings) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO company_settings (id, company_name, header_color, footer_text,
                                          footer_color, logo_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(&settings.company_name)
        .bind(&settings.header_color)
        .bind(&settings.footer_text)
        .bind(&settings.footer_color)
        .bind(&settings.logo_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict("Settings row already exists")
            } else {
                DomainError::storage(format!("Failed to insert settings: {}", e))
            }
        })?;

        Ok(())
    }

    async fn update(
        &self,
        draft: &SettingsDraft,
        logo_url: Option<&str>,
    ) -> Result<(), DomainError> {
        let result = match logo_url {
            Some(logo) => {
                sqlx::query(
                    r#"
                    UPDATE company_settings
                    SET company_name = $2, header_color = $3, footer_text = $4,
                        footer_color = $5, logo_url = $6
                    WHERE id = $1
                    "#,
                )
                .bind(SETTINGS_ID)
                .bind(&draft.company_name)
                .bind(&draft.header_color)
                .bind(&draft.footer_text)
                .bind(&draft.footer_color)
                .bind(logo)
                .execute(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE company_settings
                    SET company_name = $2, header_color = $3, footer_text = $4,
                        footer_color = $5
                    WHERE id = $1
                    "#,
                )
                .bind(SETTINGS_ID)
                .bind(&draft.company_name)
                .bind(&draft.header_color)
                .bind(&draft.footer_text)
                .bind(&draft.footer_color)
                .execute(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to update settings: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Settings row does not exist"));
        }

        Ok(())
    }
}
