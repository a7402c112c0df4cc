//! Axum route handler for resume ATS analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::prompts::build_ats_prompt;
use crate::state::AppState;

/// Anything shorter than this (after trimming) cannot be a resume.
const MIN_RESUME_CHARS: usize = 50;

const ATS_MAX_TOKENS: u32 = 1500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeRequest {
    pub resume_text: String,
    #[serde(default)]
    pub target_role: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SectionScores {
    pub experience: i64,
    pub education: i64,
    pub skills: i64,
    pub summary: i64,
}

/// Full ATS analysis. Every field is required — a reply missing any of them
/// fails the request rather than returning a partially-typed object.
#[derive(Debug, Serialize, Deserialize)]
pub struct AtsResult {
    pub ats_score: i64,
    pub keyword_score: i64,
    pub impact_score: i64,
    pub missing_keywords: Vec<String>,
    pub present_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub section_scores: SectionScores,
    pub overall_feedback: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handler
// ────────────────────────────────────────────────────────────────────────────

/// POST /resume/analyze
///
/// Rejects too-short input before any model call is made.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<ResumeRequest>,
) -> Result<Json<AtsResult>, AppError> {
    if request.resume_text.trim().chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation("Resume text too short".to_string()));
    }

    let prompt = build_ats_prompt(&request.resume_text, &request.target_role);
    let result: AtsResult = state.llm.complete_json(&prompt, "", ATS_MAX_TOKENS).await?;

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_short_resume_rejected_before_model_call() {
        // The test LLM client points at a real URL with a fake key — if the
        // handler ever reached it, this test would fail on the error kind.
        let state = AppState::for_tests();
        let request = ResumeRequest {
            resume_text: "   too short   ".to_string(),
            target_role: String::new(),
        };

        let err = handle_analyze(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_ats_result_requires_all_fields() {
        let missing_feedback = r#"{
            "ats_score": 70, "keyword_score": 60, "impact_score": 55,
            "missing_keywords": [], "present_keywords": [], "suggestions": [],
            "section_scores": {"experience": 70, "education": 80, "skills": 60, "summary": 50}
        }"#;
        assert!(serde_json::from_str::<AtsResult>(missing_feedback).is_err());
    }
}
