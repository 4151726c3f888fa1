use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::records;
use super::settings;
use super::state::AppState;

/// Create the full router with application state.
///
/// Uploaded logos are served statically from `upload_dir` under the same
/// public prefix the asset store embeds in logo references.
pub fn create_router_with_state(state: AppState, upload_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Registration and login at the top level
        .merge(auth::create_auth_router())
        // Academic records
        .merge(records::create_records_router())
        // Company settings
        .nest("/api", settings::create_settings_router())
        // Uploaded logo images
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
