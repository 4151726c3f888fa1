//! Authentication API endpoints
//!
//! Registration and login with JWT session tokens.

use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::user::User;
use crate::infrastructure::user::RegisterRequest;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Registration confirmation
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Public profile (safe to expose - never the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub email: String,
}

impl UserResponse {
    fn from_user(user: &User) -> Self {
        Self {
            username: user.username().to_string(),
            email: user.email().to_string(),
        }
    }
}

/// Register a new account
///
/// POST /register
///
/// Duplicate emails are rejected by the storage layer's unique constraint
/// and surface as a conflict.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<RegisterResponse>, ApiError> {
    state
        .auth_service
        .register(RegisterRequest {
            username: body.username,
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok(Json(RegisterResponse {
        message: "User Registered".to_string(),
    }))
}

/// Login with email and password
///
/// POST /login
///
/// Returns a JWT token and the public profile on success. An unknown email
/// and a wrong password are distinguishable responses.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = state.auth_service.login(&body.email, &body.password).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: UserResponse::from_user(&outcome.user),
    }))
}
