//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::record::RecordService;
use crate::infrastructure::settings::SettingsService;
use crate::infrastructure::user::AuthService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub settings_service: Arc<SettingsService>,
    pub record_service: Arc<RecordService>,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        settings_service: Arc<SettingsService>,
        record_service: Arc<RecordService>,
    ) -> Self {
        Self {
            auth_service,
            settings_service,
            record_service,
        }
    }
}
