//! Company settings API endpoints
//!
//! GET returns the singleton record; POST accepts a multipart form with the
//! scalar fields and an optional `logo` file part.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::settings::SettingsDraft;
use crate::infrastructure::settings::UploadedAsset;

/// Create the settings router
pub fn create_settings_router() -> Router<AppState> {
    Router::new().route("/settings", get(get_settings).post(update_settings))
}

/// Upsert confirmation
#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    pub success: bool,
}

/// Fetch the company settings
///
/// GET /api/settings
///
/// 204 when no settings have been written yet.
pub async fn get_settings(State(state): State<AppState>) -> Result<Response, ApiError> {
    match state.settings_service.get().await? {
        Some(settings) => Ok(Json(settings).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Create or update the company settings
///
/// POST /api/settings (multipart/form-data)
///
/// Scalar fields default like the form would send them; a missing `logo`
/// part leaves any existing logo untouched.
pub async fn update_settings(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UpdateSettingsResponse>, ApiError> {
    let mut draft = SettingsDraft {
        company_name: String::new(),
        header_color: "#ffffff".to_string(),
        footer_text: String::new(),
        footer_color: "#ffffff".to_string(),
    };
    let mut logo: Option<UploadedAsset> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_string);

        match name.as_deref() {
            Some("company_name") => draft.company_name = read_text(field).await?,
            Some("header_color") => draft.header_color = read_text(field).await?,
            Some("footer_text") => draft.footer_text = read_text(field).await?,
            Some("footer_color") => draft.footer_color = read_text(field).await?,
            Some("logo") => {
                let file_name = field.file_name().unwrap_or("logo").to_string();
                let data = field.bytes().await.map_err(|e| {
                    ApiError::bad_request(format!("Failed to read logo upload: {}", e))
                })?;

                // An empty file part means no upload
                if !data.is_empty() {
                    logo = Some(UploadedAsset { file_name, data });
                }
            }
            _ => {}
        }
    }

    state.settings_service.upsert(draft, logo).await?;

    Ok(Json(UpdateSettingsResponse { success: true }))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid form field: {}", e)))
}
