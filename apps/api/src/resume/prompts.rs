//! Prompt construction for resume ATS analysis.

use crate::llm_client::prompts::truncate_chars;

/// Resume text beyond this many characters is cut before prompting.
pub const RESUME_CHAR_BUDGET: usize = 4000;

/// ATS analysis prompt template.
/// Replace `{role_clause}` and `{resume_text}` before sending.
const ATS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for ATS compatibility{role_clause}.

Resume:
{resume_text}

Return a JSON object with EXACTLY these fields:
{
  "ats_score": <integer 0-100>,
  "keyword_score": <integer 0-100>,
  "impact_score": <integer 0-100>,
  "missing_keywords": [<list of missing important keywords>],
  "present_keywords": [<list of found keywords>],
  "suggestions": [<list of 5 actionable improvement suggestions>],
  "section_scores": {
    "experience": <0-100>,
    "education": <0-100>,
    "skills": <0-100>,
    "summary": <0-100>
  },
  "overall_feedback": "<2-3 sentence summary>"
}"#;

/// Builds the ATS analysis prompt. Pure: same inputs, same text.
pub fn build_ats_prompt(resume_text: &str, target_role: &str) -> String {
    let role_clause = if target_role.is_empty() {
        String::new()
    } else {
        format!(" for the role: {target_role}")
    };

    ATS_PROMPT_TEMPLATE
        .replace("{role_clause}", &role_clause)
        .replace("{resume_text}", truncate_chars(resume_text, RESUME_CHAR_BUDGET))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_clause_included_when_set() {
        let prompt = build_ats_prompt("resume body", "Backend Engineer");
        assert!(prompt.contains("for the role: Backend Engineer"));
    }

    #[test]
    fn test_role_clause_omitted_when_empty() {
        let prompt = build_ats_prompt("resume body", "");
        assert!(!prompt.contains("for the role:"));
    }

    #[test]
    fn test_resume_truncated_to_budget() {
        let long = "x".repeat(RESUME_CHAR_BUDGET + 500);
        let prompt = build_ats_prompt(&long, "");
        assert!(prompt.contains(&"x".repeat(RESUME_CHAR_BUDGET)));
        assert!(!prompt.contains(&"x".repeat(RESUME_CHAR_BUDGET + 1)));
    }
}
