//! Axum route handlers for the Career API.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::career::prompts::{build_plan_prompt, build_skill_gap_prompt};
use crate::errors::AppError;
use crate::state::AppState;

const PLAN_MAX_TOKENS: u32 = 2000;
const SKILL_GAP_MAX_TOKENS: u32 = 800;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CareerPlanRequest {
    pub resume_text: String,
    pub target_role: String,
    #[serde(default)]
    pub quiz_scores: BTreeMap<String, i64>,
    #[serde(default = "default_timeline_weeks")]
    pub timeline_weeks: u32,
}

fn default_timeline_weeks() -> u32 {
    12
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week: u32,
    pub focus: String,
    pub tasks: Vec<String>,
    pub resources: Vec<String>,
}

/// Model-written part of the roadmap. Optional fields take documented
/// defaults; the rest of the response is echoed from the request.
#[derive(Debug, Deserialize)]
struct PlanPayload {
    #[serde(default = "default_readiness")]
    readiness_score: i64,
    #[serde(default)]
    weekly_plan: Vec<WeekPlan>,
    #[serde(default)]
    key_milestones: Vec<String>,
    #[serde(default)]
    top_resources: Vec<String>,
}

fn default_readiness() -> i64 {
    50
}

#[derive(Debug, Serialize)]
pub struct CareerPlanResponse {
    pub target_role: String,
    pub readiness_score: i64,
    pub timeline_weeks: u32,
    pub weekly_plan: Vec<WeekPlan>,
    pub key_milestones: Vec<String>,
    pub top_resources: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Deserialize)]
struct SkillGapPayload {
    match_percentage: i64,
    required_skills: Vec<String>,
    present_skills: Vec<String>,
    missing_skills: Vec<String>,
    priority_skills: Vec<String>,
    estimated_weeks: u32,
}

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    pub target_role: String,
    pub match_percentage: i64,
    pub required_skills: Vec<String>,
    pub present_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub priority_skills: Vec<String>,
    pub estimated_weeks: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /career/plan
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(request): Json<CareerPlanRequest>,
) -> Result<Json<CareerPlanResponse>, AppError> {
    let prompt = build_plan_prompt(
        &request.resume_text,
        &request.target_role,
        &request.quiz_scores,
        request.timeline_weeks,
    );

    let payload: PlanPayload = state.llm.complete_json(&prompt, "", PLAN_MAX_TOKENS).await?;

    Ok(Json(CareerPlanResponse {
        target_role: request.target_role,
        readiness_score: payload.readiness_score,
        timeline_weeks: request.timeline_weeks,
        weekly_plan: payload.weekly_plan,
        key_milestones: payload.key_milestones,
        top_resources: payload.top_resources,
    }))
}

/// POST /career/skill-gap
pub async fn handle_skill_gap(
    State(state): State<AppState>,
    Json(request): Json<SkillGapRequest>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let prompt = build_skill_gap_prompt(&request.current_skills, &request.target_role);

    let payload: SkillGapPayload = state
        .llm
        .complete_json(&prompt, "", SKILL_GAP_MAX_TOKENS)
        .await?;

    Ok(Json(SkillGapResponse {
        target_role: request.target_role,
        match_percentage: payload.match_percentage,
        required_skills: payload.required_skills,
        present_skills: payload.present_skills,
        missing_skills: payload.missing_skills,
        priority_skills: payload.priority_skills,
        estimated_weeks: payload.estimated_weeks,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_payload_defaults_when_fields_missing() {
        let payload: PlanPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.readiness_score, 50);
        assert!(payload.weekly_plan.is_empty());
        assert!(payload.key_milestones.is_empty());
        assert!(payload.top_resources.is_empty());
    }

    #[test]
    fn test_plan_payload_week_entries_fully_required() {
        let missing_focus = r#"{"weekly_plan": [{"week": 1, "tasks": [], "resources": []}]}"#;
        assert!(serde_json::from_str::<PlanPayload>(missing_focus).is_err());
    }

    #[test]
    fn test_skill_gap_payload_requires_all_fields() {
        let missing_weeks = r#"{
            "match_percentage": 60,
            "required_skills": [], "present_skills": [],
            "missing_skills": [], "priority_skills": []
        }"#;
        assert!(serde_json::from_str::<SkillGapPayload>(missing_weeks).is_err());
    }

    #[test]
    fn test_career_plan_request_defaults() {
        let request: CareerPlanRequest = serde_json::from_str(
            r#"{"resume_text": "...", "target_role": "SDE-2"}"#,
        )
        .unwrap();
        assert_eq!(request.timeline_weeks, 12);
        assert!(request.quiz_scores.is_empty());
    }
}
