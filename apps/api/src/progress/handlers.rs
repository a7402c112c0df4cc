//! Axum route handlers for the Progress API.
//!
//! Identity comes from the verified bearer token's subject. Requests without
//! an Authorization header share the "anonymous" record; a present but
//! invalid token is rejected rather than silently becoming its own user.

use axum::{extract::State, http::HeaderMap, Json};
use serde::Deserialize;

use crate::auth::token::verify_token;
use crate::config::Config;
use crate::errors::AppError;
use crate::progress::store::ProgressRecord;
use crate::progress::update::UpdateValue;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProgressUpdateRequest {
    pub field: String,
    pub value: UpdateValue,
}

fn user_id(headers: &HeaderMap, config: &Config) -> Result<String, AppError> {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match bearer {
        Some(token) => verify_token(token, config).map(|claims| claims.sub),
        None => Ok("anonymous".to_string()),
    }
}

/// GET /progress
pub async fn handle_get(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProgressRecord>, AppError> {
    let uid = user_id(&headers, &state.config)?;
    Ok(Json(state.progress.get(&uid)?))
}

/// POST /progress
pub async fn handle_update(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ProgressUpdateRequest>,
) -> Result<Json<ProgressRecord>, AppError> {
    let uid = user_id(&headers, &state.config)?;
    let record = state.progress.update(&uid, &request.field, request.value)?;
    Ok(Json(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::create_token;

    #[test]
    fn test_missing_header_is_anonymous() {
        let config = Config::for_tests();
        let headers = HeaderMap::new();
        assert_eq!(user_id(&headers, &config).unwrap(), "anonymous");
    }

    #[test]
    fn test_valid_token_resolves_subject() {
        let config = Config::for_tests();
        let token = create_token("asha@example.com", &config).unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("authorization", format!("Bearer {token}").parse().unwrap());

        assert_eq!(user_id(&headers, &config).unwrap(), "asha@example.com");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let config = Config::for_tests();
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer not-a-jwt".parse().unwrap());

        let err = user_id(&headers, &config).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_non_bearer_header_is_anonymous() {
        let config = Config::for_tests();
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic dXNlcjpwdw==".parse().unwrap());

        assert_eq!(user_id(&headers, &config).unwrap(), "anonymous");
    }

    #[tokio::test]
    async fn test_numeric_update_round_trip() {
        let state = AppState::for_tests();
        let request: ProgressUpdateRequest =
            serde_json::from_str(r#"{"field": "ats_score", "value": 68}"#).unwrap();

        let Json(record) = handle_update(State(state.clone()), HeaderMap::new(), Json(request))
            .await
            .unwrap();
        assert_eq!(record.ats_score, 68);

        let Json(read_back) = handle_get(State(state), HeaderMap::new()).await.unwrap();
        assert_eq!(read_back.ats_score, 68);
    }
}
