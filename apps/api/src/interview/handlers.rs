//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::prompts::{build_question_prompt, build_score_prompt};
use crate::state::AppState;

const QUESTION_MAX_TOKENS: u32 = 600;
const SCORE_MAX_TOKENS: u32 = 800;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub role: String,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_mode() -> String {
    "behavioral".to_string()
}

fn default_difficulty() -> String {
    "medium".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question: String,
    pub tips: Vec<String>,
    pub follow_ups: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub question: String,
    pub answer: String,
    #[serde(default = "default_mode")]
    pub mode: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub score: i64,
    pub grade: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub star_feedback: String,
    pub model_answer_hint: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /interview/question
pub async fn handle_question(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let prompt = build_question_prompt(&request.role, &request.mode, &request.difficulty);
    let response: QuestionResponse = state
        .llm
        .complete_json(&prompt, "", QUESTION_MAX_TOKENS)
        .await?;

    Ok(Json(response))
}

/// POST /interview/score
///
/// The score and grade come from the model — unlike quiz grading, there is
/// no local rubric to check an open-ended answer against.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let prompt = build_score_prompt(&request.question, &request.answer, &request.mode);
    let response: ScoreResponse = state
        .llm
        .complete_json(&prompt, "", SCORE_MAX_TOKENS)
        .await?;

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_request_defaults() {
        let request: QuestionRequest =
            serde_json::from_str(r#"{"role": "Data Scientist"}"#).unwrap();
        assert_eq!(request.mode, "behavioral");
        assert_eq!(request.difficulty, "medium");
    }

    #[test]
    fn test_score_response_requires_all_fields() {
        let missing_hint = r#"{
            "score": 72, "grade": "B",
            "strengths": ["clear"], "improvements": ["metrics"],
            "star_feedback": "good structure"
        }"#;
        assert!(serde_json::from_str::<ScoreResponse>(missing_hint).is_err());
    }
}
