//! Axum route handlers for the Quiz API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::quiz::prompts::{build_feedback_prompt, build_generate_prompt, clamp_count};
use crate::quiz::scoring::{grade_quiz, wrong_questions, SubmittedQuestion};
use crate::state::AppState;

const GENERATE_MAX_TOKENS: u32 = 3000;
const FEEDBACK_MAX_TOKENS: u32 = 500;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub domain: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default = "default_count")]
    pub count: u32,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_count() -> u32 {
    8
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: i64,
    pub explanation: String,
}

#[derive(Debug, Deserialize)]
struct GeneratedQuestions {
    questions: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub domain: String,
    pub difficulty: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub questions: Vec<SubmittedQuestion>,
    pub answers: Vec<i64>,
}

/// Model-written half of the quiz result.
#[derive(Debug, Serialize, Deserialize)]
pub struct Feedback {
    pub feedback: String,
    pub weak_areas: Vec<String>,
    pub recommendations: Vec<String>,
}

impl Feedback {
    fn canned(score: i64) -> Self {
        Feedback {
            feedback: format!("You scored {score}%. Keep practicing!"),
            weak_areas: vec![],
            recommendations: vec![
                "Review the topics you missed".to_string(),
                "Practice more questions".to_string(),
            ],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    pub score: i64,
    pub correct: usize,
    pub total: usize,
    pub grade: String,
    #[serde(flatten)]
    pub feedback: Feedback,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /quiz/generate
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let count = clamp_count(request.count);
    let prompt = build_generate_prompt(&request.domain, &request.difficulty, count);

    let generated: GeneratedQuestions = state
        .llm
        .complete_json(&prompt, "", GENERATE_MAX_TOKENS)
        .await?;

    Ok(Json(GenerateResponse {
        domain: request.domain,
        difficulty: request.difficulty,
        questions: generated.questions,
    }))
}

/// POST /quiz/submit
///
/// Grades locally, then asks the model for feedback on the result. A parse
/// failure on the feedback call degrades to a canned payload; the score
/// itself never depends on the model.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<QuizResult>, AppError> {
    if request.questions.len() != request.answers.len() {
        return Err(AppError::Validation(
            "Questions and answers length mismatch".to_string(),
        ));
    }

    let tally = grade_quiz(&request.questions, &request.answers);
    let wrong = wrong_questions(&request.questions, &request.answers);

    let prompt = build_feedback_prompt(tally.score, tally.correct, tally.total, &wrong);
    let feedback = match state
        .llm
        .complete_json::<Feedback>(&prompt, "", FEEDBACK_MAX_TOKENS)
        .await
    {
        Ok(feedback) => feedback,
        Err(LlmError::Parse(e)) => {
            tracing::warn!("Quiz feedback parse failed, using canned feedback: {e}");
            Feedback::canned(tally.score)
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(QuizResult {
        score: tally.score,
        correct: tally.correct,
        total: tally.total,
        grade: tally.grade.to_string(),
        feedback,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_length_mismatch_rejected_before_scoring() {
        let state = AppState::for_tests();
        let request: SubmitRequest = serde_json::from_str(
            r#"{"questions": [{"question": "Q1", "correct_index": 0}], "answers": [0, 1]}"#,
        )
        .unwrap();

        let err = handle_submit(State(state), Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_canned_feedback_mentions_score() {
        let feedback = Feedback::canned(40);
        assert_eq!(feedback.feedback, "You scored 40%. Keep practicing!");
        assert_eq!(feedback.recommendations.len(), 2);
    }

    #[test]
    fn test_quiz_result_flattens_feedback() {
        let result = QuizResult {
            score: 75,
            correct: 3,
            total: 4,
            grade: "B".to_string(),
            feedback: Feedback::canned(75),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["grade"], "B");
        // Feedback fields sit at the top level, not nested.
        assert!(value["feedback"].is_string());
        assert!(value["weak_areas"].is_array());
    }
}
