//! Company settings domain

mod entity;
mod repository;

pub use entity::{CompanySettings, SettingsDraft, SETTINGS_ID};
pub use repository::SettingsRepository;

#[cfg(test)]
pub use repository::mock::MockSettingsRepository;
