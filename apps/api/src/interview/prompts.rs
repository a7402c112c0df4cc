//! Prompt construction for interview practice.

/// Question generation template.
/// Replace `{difficulty}`, `{mode}` and `{role}` before sending.
const QUESTION_PROMPT_TEMPLATE: &str = r#"Generate a {difficulty} {mode} interview question for a {role} role at an Indian tech company.

Return JSON:
{
  "question": "<the interview question>",
  "tips": ["<tip 1>", "<tip 2>", "<tip 3>"],
  "follow_ups": ["<follow-up question 1>", "<follow-up question 2>"]
}"#;

/// Answer scoring template.
/// Replace `{mode}`, `{question}` and `{answer}` before sending.
const SCORE_PROMPT_TEMPLATE: &str = r#"Score this interview answer for a {mode} question.

Question: {question}
Answer: {answer}

Return JSON:
{
  "score": <integer 0-100>,
  "grade": "<A|B|C|D>",
  "strengths": ["<strength 1>", "<strength 2>"],
  "improvements": ["<improvement 1>", "<improvement 2>"],
  "star_feedback": "<feedback on STAR method usage>",
  "model_answer_hint": "<brief hint for a better answer>"
}"#;

pub fn build_question_prompt(role: &str, mode: &str, difficulty: &str) -> String {
    QUESTION_PROMPT_TEMPLATE
        .replace("{difficulty}", difficulty)
        .replace("{mode}", mode)
        .replace("{role}", role)
}

pub fn build_score_prompt(question: &str, answer: &str, mode: &str) -> String {
    SCORE_PROMPT_TEMPLATE
        .replace("{mode}", mode)
        .replace("{question}", question)
        .replace("{answer}", answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_prompt_embeds_all_fields() {
        let prompt = build_question_prompt("SDE-2", "technical", "hard");
        assert!(prompt.contains("a hard technical interview question for a SDE-2 role"));
    }

    #[test]
    fn test_score_prompt_embeds_question_and_answer() {
        let prompt = build_score_prompt("Tell me about a conflict.", "I resolved it.", "behavioral");
        assert!(prompt.contains("Question: Tell me about a conflict."));
        assert!(prompt.contains("Answer: I resolved it."));
        assert!(prompt.contains("for a behavioral question"));
    }
}
