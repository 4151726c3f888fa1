//! Company settings entity

use serde::{Deserialize, Serialize};

/// The fixed key of the singleton settings row.
pub const SETTINGS_ID: i32 = 1;

/// Company branding settings.
///
/// A singleton record: the storage layer holds at most one row, identified by
/// [`SETTINGS_ID`]. Created on the first write, updated in place afterwards,
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub company_name: String,
    pub header_color: String,
    pub footer_text: String,
    pub footer_color: String,
    /// Public path of the current logo in the asset store, if one was uploaded
    pub logo_url: Option<String>,
}

/// Scalar fields of a settings write.
///
/// The logo is carried separately because its handling differs: an absent
/// logo must never clear an existing reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsDraft {
    pub company_name: String,
    pub header_color: String,
    pub footer_text: String,
    pub footer_color: String,
}

impl SettingsDraft {
    /// Combine the draft with a logo reference into a full record
    pub fn into_settings(self, logo_url: Option<String>) -> CompanySettings {
        CompanySettings {
            company_name: self.company_name,
            header_color: self.header_color,
            footer_text: self.footer_text,
            footer_color: self.footer_color,
            logo_url,
        }
    }
}
