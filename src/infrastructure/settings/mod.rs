//! Settings infrastructure module

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresSettingsRepository;
pub use service::{SettingsService, UploadedAsset};
