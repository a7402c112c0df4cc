//! Axum route handlers for the Jobs API.
//!
//! Listings are model-generated stand-ins for a real job-board integration.
//! Both endpoints degrade to static fallback data when the reply cannot be
//! parsed.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::fallback;
use crate::jobs::prompts::{build_list_prompt, TRENDS_PROMPT};
use crate::llm_client::LlmError;
use crate::state::AppState;

const LIST_MAX_TOKENS: u32 = 1500;
const TRENDS_MAX_TOKENS: u32 = 600;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub role: String,
    #[serde(default = "default_location")]
    pub location: String,
}

fn default_location() -> String {
    "India".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default = "default_job_type", rename = "type")]
    pub kind: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub url: String,
}

fn default_job_type() -> String {
    "Full Time".to_string()
}

fn default_icon() -> String {
    "🏢".to_string()
}

#[derive(Debug, Deserialize)]
struct ListPayload {
    #[serde(default)]
    jobs: Vec<Job>,
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
}

impl JobsResponse {
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        let total = jobs.len();
        Self { jobs, total }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SalaryRanges {
    pub fresher: String,
    pub mid: String,
    pub senior: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TrendsResponse {
    pub hot_roles: Vec<String>,
    pub top_skills: Vec<String>,
    pub salary_ranges: SalaryRanges,
    pub insight: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /jobs/list?role=&location=
///
/// Parse failures fall back to a small static list; transport and provider
/// errors still propagate.
pub async fn handle_list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let prompt = build_list_prompt(&query.role, &query.location);

    let jobs = match state
        .llm
        .complete_json::<ListPayload>(&prompt, "", LIST_MAX_TOKENS)
        .await
    {
        Ok(payload) => payload.jobs,
        Err(LlmError::Parse(e)) => {
            tracing::warn!("Job listing parse failed, serving fallback data: {e}");
            fallback::jobs()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(JobsResponse::from_jobs(jobs)))
}

/// GET /jobs/trends
pub async fn handle_trends(
    State(state): State<AppState>,
) -> Result<Json<TrendsResponse>, AppError> {
    let trends = match state
        .llm
        .complete_json::<TrendsResponse>(TRENDS_PROMPT, "", TRENDS_MAX_TOKENS)
        .await
    {
        Ok(trends) => trends,
        Err(LlmError::Parse(e)) => {
            tracing::warn!("Trends parse failed, serving fallback data: {e}");
            fallback::trends()
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(trends))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_defaults_fill_optional_fields() {
        let job: Job = serde_json::from_str(
            r#"{"title": "SDE", "company": "CRED", "location": "Mumbai"}"#,
        )
        .unwrap();
        assert_eq!(job.kind, "Full Time");
        assert_eq!(job.icon, "🏢");
        assert!(job.salary.is_empty());
        assert!(job.skills.is_empty());
    }

    #[test]
    fn test_job_kind_round_trips_as_type() {
        let job: Job = serde_json::from_str(
            r#"{"title": "SDE", "company": "CRED", "location": "Mumbai", "type": "Contract"}"#,
        )
        .unwrap();
        assert_eq!(job.kind, "Contract");
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["type"], "Contract");
    }

    #[test]
    fn test_missing_jobs_key_decodes_to_empty_listing() {
        let payload: ListPayload = serde_json::from_str("{}").unwrap();
        assert!(payload.jobs.is_empty());
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.role.is_empty());
        assert_eq!(query.location, "India");
    }
}
