//! Registrar API
//!
//! A small record-management service:
//! - account registration and login with Argon2 hashing and JWT session tokens
//! - a singleton company-settings record with logo upload and replacement
//! - CRUD over academic records

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::asset::LocalAssetStore;
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::record::{PostgresRecordRepository, RecordService};
use infrastructure::settings::{PostgresSettingsRepository, SettingsService};
use infrastructure::storage::PostgresMigrator;
use infrastructure::user::{Argon2Hasher, AuthService, PostgresUserRepository};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

    info!("Connecting to PostgreSQL...");
    let pg_pool = sqlx::PgPool::connect(&database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
    info!("PostgreSQL connection established");

    PostgresMigrator::new(pg_pool.clone()).run().await?;

    let jwt = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_secs,
    )));

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::new(Argon2Hasher::new()),
        jwt,
    ));

    let assets = Arc::new(LocalAssetStore::new(
        config.assets.upload_dir.clone(),
        config.assets.public_prefix.clone(),
    ));
    let settings_service = Arc::new(SettingsService::new(
        Arc::new(PostgresSettingsRepository::new(pg_pool.clone())),
        assets,
    ));

    let record_service = Arc::new(RecordService::new(Arc::new(PostgresRecordRepository::new(
        pg_pool,
    ))));

    Ok(AppState::new(auth_service, settings_service, record_service))
}
