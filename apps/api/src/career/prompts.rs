//! Prompt construction for career planning and skill-gap analysis.

use std::collections::BTreeMap;

use crate::llm_client::prompts::truncate_chars;

/// Resume summaries beyond this many characters are cut before prompting.
pub const RESUME_SUMMARY_BUDGET: usize = 1500;

/// Career plan template.
/// Replace `{timeline_weeks}`, `{target_role}`, `{resume_text}` and
/// `{quiz_scores}` before sending.
const PLAN_PROMPT_TEMPLATE: &str = r#"Create a {timeline_weeks}-week personalized career roadmap.
Target Role: {target_role}
Resume Summary: {resume_text}
Quiz Scores: {quiz_scores}

Return JSON:
{
  "readiness_score": <0-100>,
  "weekly_plan": [
    {
      "week": 1,
      "focus": "<topic focus>",
      "tasks": ["<task 1>", "<task 2>"],
      "resources": ["<resource 1>"]
    }
  ],
  "key_milestones": ["<milestone 1>", "<milestone 2>", "<milestone 3>"],
  "top_resources": ["<resource with URL>", "<resource 2>", "<resource 3>"]
}

Include only first 4 weeks in weekly_plan for brevity."#;

/// Skill gap template.
/// Replace `{target_role}` and `{current_skills}` before sending.
const SKILL_GAP_PROMPT_TEMPLATE: &str = r#"Perform a skill gap analysis.
Target Role: {target_role}
Current Skills: {current_skills}

Return JSON:
{
  "match_percentage": <0-100>,
  "required_skills": ["<skill 1>", ...],
  "present_skills": ["<matched skill>", ...],
  "missing_skills": ["<missing skill>", ...],
  "priority_skills": ["<top 1>", "<top 2>", "<top 3>"],
  "estimated_weeks": <integer weeks to close gap>
}"#;

/// Builds the roadmap prompt. Quiz scores arrive as a `BTreeMap` so the
/// serialized ordering — and therefore the prompt text — is deterministic.
pub fn build_plan_prompt(
    resume_text: &str,
    target_role: &str,
    quiz_scores: &BTreeMap<String, i64>,
    timeline_weeks: u32,
) -> String {
    PLAN_PROMPT_TEMPLATE
        .replace("{timeline_weeks}", &timeline_weeks.to_string())
        .replace("{target_role}", target_role)
        .replace(
            "{resume_text}",
            truncate_chars(resume_text, RESUME_SUMMARY_BUDGET),
        )
        .replace(
            "{quiz_scores}",
            &serde_json::to_string(quiz_scores).unwrap_or_default(),
        )
}

pub fn build_skill_gap_prompt(current_skills: &[String], target_role: &str) -> String {
    SKILL_GAP_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace(
            "{current_skills}",
            &serde_json::to_string(current_skills).unwrap_or_default(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_prompt_is_deterministic() {
        let scores = BTreeMap::from([
            ("React".to_string(), 62),
            ("System Design".to_string(), 41),
        ]);
        let a = build_plan_prompt("resume", "SDE-2", &scores, 12);
        let b = build_plan_prompt("resume", "SDE-2", &scores, 12);
        assert_eq!(a, b);
        assert!(a.contains(r#"{"React":62,"System Design":41}"#));
    }

    #[test]
    fn test_plan_prompt_truncates_resume() {
        let long = "r".repeat(RESUME_SUMMARY_BUDGET + 100);
        let prompt = build_plan_prompt(&long, "SDE-2", &BTreeMap::new(), 12);
        assert!(prompt.contains(&"r".repeat(RESUME_SUMMARY_BUDGET)));
        assert!(!prompt.contains(&"r".repeat(RESUME_SUMMARY_BUDGET + 1)));
    }

    #[test]
    fn test_skill_gap_prompt_embeds_skills() {
        let prompt =
            build_skill_gap_prompt(&["Rust".to_string(), "SQL".to_string()], "Backend Engineer");
        assert!(prompt.contains(r#"["Rust","SQL"]"#));
        assert!(prompt.contains("Target Role: Backend Engineer"));
    }
}
