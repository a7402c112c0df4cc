//! Local quiz grading.
//!
//! Grading never goes to the model: the generated questions carry
//! `correct_index`, so a submitted answer sheet is checked here.

use serde::{Deserialize, Serialize};

/// A question as submitted back with an answer sheet. Tolerant in shape:
/// `correct_index` defaults to -1 when absent, so a missing key never
/// matches an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedQuestion {
    #[serde(default)]
    pub id: i64,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_correct_index")]
    pub correct_index: i64,
}

fn default_correct_index() -> i64 {
    -1
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub correct: usize,
    pub total: usize,
    pub score: i64,
    pub grade: &'static str,
}

/// Grades an answer sheet against its questions.
///
/// Callers validate that both slices have equal length; here the shorter of
/// the two bounds the comparison. `score = round(100 * correct / total)`;
/// an empty quiz scores 0.
pub fn grade_quiz(questions: &[SubmittedQuestion], answers: &[i64]) -> Tally {
    let correct = questions
        .iter()
        .zip(answers)
        .filter(|(q, &a)| a == q.correct_index)
        .count();
    let total = questions.len();

    let score = if total == 0 {
        0
    } else {
        (correct as f64 / total as f64 * 100.0).round() as i64
    };

    Tally {
        correct,
        total,
        score,
        grade: grade_for(score),
    }
}

/// Grade boundaries: 85 / 70 / 50.
pub fn grade_for(score: i64) -> &'static str {
    if score >= 85 {
        "A"
    } else if score >= 70 {
        "B"
    } else if score >= 50 {
        "C"
    } else {
        "D"
    }
}

/// The questions the user got wrong, for the feedback prompt.
pub fn wrong_questions<'a>(
    questions: &'a [SubmittedQuestion],
    answers: &[i64],
) -> Vec<&'a str> {
    questions
        .iter()
        .zip(answers)
        .filter(|(q, &a)| a != q.correct_index)
        .map(|(q, _)| q.question.as_str())
        .collect()
}
