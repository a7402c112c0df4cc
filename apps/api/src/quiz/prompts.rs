//! Prompt construction for quiz generation and feedback.

/// Requested question counts are clamped into this range.
pub const MIN_QUESTIONS: u32 = 2;
pub const MAX_QUESTIONS: u32 = 15;

/// At most this many wrong questions are quoted back for feedback.
pub const MAX_WRONG_QUOTED: usize = 5;

/// Quiz generation template.
/// Replace `{count}`, `{domain}` and `{difficulty}` before sending.
const GENERATE_PROMPT_TEMPLATE: &str = r#"Create {count} multiple-choice quiz questions on the topic "{domain}" at {difficulty} difficulty.
Target audience: Indian tech students/professionals.

Return JSON:
{
  "questions": [
    {
      "id": 1,
      "question": "<question text>",
      "options": ["<option A>", "<option B>", "<option C>", "<option D>"],
      "correct_index": <0-3>,
      "explanation": "<brief explanation of correct answer>"
    }
  ]
}"#;

/// Post-quiz feedback template.
/// Replace `{score}`, `{correct}`, `{total}` and `{wrong}` before sending.
const FEEDBACK_PROMPT_TEMPLATE: &str = r#"A student scored {score}% ({correct}/{total}) on a quiz.
Wrong questions: {wrong}

Return JSON:
{
  "feedback": "<2-sentence performance summary>",
  "weak_areas": ["<area 1>", "<area 2>"],
  "recommendations": ["<recommendation 1>", "<recommendation 2>", "<recommendation 3>"]
}"#;

pub fn clamp_count(count: u32) -> u32 {
    count.clamp(MIN_QUESTIONS, MAX_QUESTIONS)
}

pub fn build_generate_prompt(domain: &str, difficulty: &str, count: u32) -> String {
    GENERATE_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{domain}", domain)
        .replace("{difficulty}", difficulty)
}

pub fn build_feedback_prompt(score: i64, correct: usize, total: usize, wrong: &[&str]) -> String {
    let quoted = &wrong[..wrong.len().min(MAX_WRONG_QUOTED)];
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{score}", &score.to_string())
        .replace("{correct}", &correct.to_string())
        .replace("{total}", &total.to_string())
        .replace("{wrong}", &serde_json::to_string(quoted).unwrap_or_default())
}
