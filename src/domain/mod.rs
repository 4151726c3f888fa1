//! Domain layer - Core entities and repository traits

pub mod asset;
pub mod error;
pub mod record;
pub mod settings;
pub mod user;

pub use asset::AssetStore;
pub use error::DomainError;
pub use record::{CollegeRecord, RecordDraft, RecordRepository};
pub use settings::{CompanySettings, SettingsDraft, SettingsRepository, SETTINGS_ID};
pub use user::{User, UserRepository};
