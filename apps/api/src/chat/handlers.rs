//! Axum route handler for the AI chat proxy.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::{ChatMessage, CHAT_MAX_TOKENS, CHAT_TEMPERATURE};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub system: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_max_tokens() -> u32 {
    CHAT_MAX_TOKENS
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /ai/chat
///
/// Forwards the conversation verbatim and returns the assistant reply as a
/// plain string — the one endpoint that does not expect JSON back.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let reply = state
        .llm
        .complete(
            &request.messages,
            &request.system,
            None,
            request.max_tokens,
            CHAT_TEMPERATURE,
        )
        .await?;

    Ok(Json(ChatResponse { reply }))
}
