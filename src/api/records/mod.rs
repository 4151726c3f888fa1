//! Academic record API endpoints
//!
//! Column-mapped CRUD over college records, served under /dashboard.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::record::{CollegeRecord, RecordDraft};

/// Create the records router
pub fn create_records_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(list_records).post(create_record))
        .route(
            "/dashboard/{id}",
            axum::routing::put(update_record).delete(delete_record),
        )
}

/// List all records
///
/// GET /dashboard
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollegeRecord>>, ApiError> {
    Ok(Json(state.record_service.list().await?))
}

/// Add a record
///
/// POST /dashboard
pub async fn create_record(
    State(state): State<AppState>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<CollegeRecord>, ApiError> {
    Ok(Json(state.record_service.create(draft).await?))
}

/// Update a record
///
/// PUT /dashboard/{id}
pub async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<RecordDraft>,
) -> Result<Json<CollegeRecord>, ApiError> {
    Ok(Json(state.record_service.update(id, draft).await?))
}

/// Delete a record
///
/// DELETE /dashboard/{id}
pub async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.record_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
