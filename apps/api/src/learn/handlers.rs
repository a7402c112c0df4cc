//! Axum route handlers for the Learning Journey API.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::learn::models::{LearningPath, PathPayload, QuizScore, Resource};
use crate::learn::prompts::{build_adapt_prompt, build_generate_prompt, build_resources_prompt};
use crate::state::AppState;

const PATH_MAX_TOKENS: u32 = 3000;
const RESOURCES_MAX_TOKENS: u32 = 1000;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub target_role: String,
    #[serde(default)]
    pub quiz_scores: Vec<QuizScore>,
    #[serde(default)]
    pub current_skills: Vec<String>,
    #[serde(default = "default_weekly_hours")]
    pub weekly_hours: u32,
}

fn default_weekly_hours() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct AdaptRequest {
    pub current_path: Value,
    pub new_quiz: QuizScore,
}

#[derive(Debug, Deserialize)]
pub struct ResourceRequest {
    pub topic: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_level() -> String {
    "intermediate".to_string()
}

fn default_count() -> u32 {
    4
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /learn/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<LearningPath>, AppError> {
    let prompt = build_generate_prompt(
        &request.target_role,
        &request.quiz_scores,
        &request.current_skills,
        request.weekly_hours,
    );

    let payload: PathPayload = state.llm.complete_json(&prompt, "", PATH_MAX_TOKENS).await?;

    Ok(Json(LearningPath {
        target_role: request.target_role,
        overall_readiness: payload.overall_readiness.unwrap_or(40),
        total_weeks: payload.total_weeks.unwrap_or(12),
        adapted_from_scores: !request.quiz_scores.is_empty(),
        modules: payload.modules,
        next_action: payload
            .next_action
            .unwrap_or_else(|| "Start with the first critical module".to_string()),
        motivational_note: payload
            .motivational_note
            .unwrap_or_else(|| "You're on the right path!".to_string()),
    }))
}

/// POST /learn/adapt
///
/// Re-prioritizes an existing path after a new quiz result. The target role
/// is read back out of the submitted path, defaulting to empty.
pub async fn handle_adapt(
    State(state): State<AppState>,
    Json(request): Json<AdaptRequest>,
) -> Result<Json<LearningPath>, AppError> {
    let prompt = build_adapt_prompt(&request.current_path, &request.new_quiz);

    let payload: PathPayload = state.llm.complete_json(&prompt, "", PATH_MAX_TOKENS).await?;

    let target_role = request
        .current_path
        .get("target_role")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Ok(Json(LearningPath {
        target_role,
        overall_readiness: payload.overall_readiness.unwrap_or(50),
        total_weeks: payload.total_weeks.unwrap_or(10),
        adapted_from_scores: true,
        modules: payload.modules,
        next_action: payload
            .next_action
            .unwrap_or_else(|| "Continue with updated priorities".to_string()),
        motivational_note: payload
            .motivational_note
            .unwrap_or_else(|| "Great progress!".to_string()),
    }))
}

/// POST /learn/resources
///
/// The one endpoint whose reply is a bare JSON array.
pub async fn handle_resources(
    State(state): State<AppState>,
    Json(request): Json<ResourceRequest>,
) -> Result<Json<Vec<Resource>>, AppError> {
    let prompt = build_resources_prompt(&request.topic, &request.level, request.count);

    let resources: Vec<Resource> = state
        .llm
        .complete_json(&prompt, "", RESOURCES_MAX_TOKENS)
        .await?;

    Ok(Json(resources))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"target_role": "ML Engineer"}"#).unwrap();
        assert!(request.quiz_scores.is_empty());
        assert!(request.current_skills.is_empty());
        assert_eq!(request.weekly_hours, 10);
    }

    #[test]
    fn test_resource_request_defaults() {
        let request: ResourceRequest = serde_json::from_str(r#"{"topic": "Kafka"}"#).unwrap();
        assert_eq!(request.level, "intermediate");
        assert_eq!(request.count, 4);
    }

    #[test]
    fn test_adapt_request_reads_any_path_shape() {
        let request: AdaptRequest = serde_json::from_str(
            r#"{
                "current_path": {"target_role": "SDE-2", "modules": []},
                "new_quiz": {"domain": "React", "score": 88}
            }"#,
        )
        .unwrap();
        assert_eq!(request.current_path["target_role"], "SDE-2");
        assert_eq!(request.new_quiz.difficulty, "medium");
    }
}
