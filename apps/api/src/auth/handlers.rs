//! Axum route handlers for the Auth API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::token::create_token;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub name: String,
}

impl TokenResponse {
    fn bearer(access_token: String, name: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            name,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /auth/register
///
/// Creates the user and immediately issues a token. Duplicate emails are a
/// 400 conflict.
pub async fn handle_register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    let record = state
        .users
        .register(&request.email, &request.password, &request.name)?;

    let token = create_token(&request.email, &state.config)?;

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse::bearer(token, record.name)),
    ))
}

/// POST /auth/login
///
/// Verifies credentials and issues a fresh token.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let record = state.users.verify(&request.email, &request.password)?;

    let token = create_token(&request.email, &state.config)?;

    Ok(Json(TokenResponse::bearer(token, record.name)))
}
