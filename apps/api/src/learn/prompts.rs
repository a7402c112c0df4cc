//! Prompt construction for learning-path generation, adaptation and
//! resource lookup.
//!
//! The priority rules here (score < 50 ⇒ critical, 50–70 ⇒ high, > 70 ⇒
//! medium; adapt: ≥ 80 demote, < 50 escalate) are advisory instructions to
//! the model — nothing locally verifies the reply obeyed them.

use crate::learn::models::QuizScore;

/// The current-path JSON quoted in an adapt prompt is cut at this budget.
pub const CURRENT_PATH_BUDGET: usize = 2000;

/// Full path generation template.
/// Replace `{target_role}`, `{scores_text}`, `{skills_text}`,
/// `{weekly_hours}` and `{adapted}` before sending.
const GENERATE_PROMPT_TEMPLATE: &str = r#"You are an expert career coach for Indian tech professionals.
Build an adaptive AI learning path.

Target Role: {target_role}
{scores_text}
{skills_text}
Available time: {weekly_hours} hours/week

Rules:
- Modules with quiz score < 50 are "critical" priority
- Modules with score 50-70 are "high" priority
- Modules with score > 70 are "medium" (polish)
- If no quiz taken for a domain, estimate from the role requirements
- For each module, recommend 2-3 REAL resources (actual YouTube channels/playlists or Coursera courses that exist)
- Use Indian context where relevant

Return ONLY valid JSON:
{
  "overall_readiness": <0-100 integer>,
  "total_weeks": <integer>,
  "adapted_from_scores": {adapted},
  "next_action": "<single most impactful action to take TODAY>",
  "motivational_note": "<1 sentence personal encouragement based on their scores>",
  "modules": [
    {
      "id": 1,
      "title": "<module title>",
      "domain": "<domain name>",
      "priority": "<critical|high|medium>",
      "current_score": <0-100>,
      "target_score": <target 0-100>,
      "estimated_weeks": <integer>,
      "why_this_now": "<1 sentence AI reasoning why this module is prioritized>",
      "milestone": "<what they can do/build after completing this>",
      "resources": [
        {
          "title": "<resource title>",
          "type": "<youtube|coursera|article|practice>",
          "url": "<real URL>",
          "duration": "<time estimate>",
          "difficulty": "<beginner|intermediate|advanced>",
          "why": "<why specifically for this user>"
        }
      ]
    }
  ]
}

Include 3-5 modules total, ordered by priority. Keep it realistic and actionable."#;

/// Path adaptation template.
/// Replace `{domain}`, `{score}` and `{current_path}` before sending.
const ADAPT_PROMPT_TEMPLATE: &str = r#"A user just completed a quiz and their path needs adapting.

New quiz result: {domain} = {score}%
Current path summary: {current_path}

Re-generate the learning path with updated priorities.
If score >= 80, mark that module as "medium" or remove it.
If score < 50, escalate to "critical".
Keep the same JSON structure as before.

Return ONLY valid JSON with the same structure as the original path."#;

/// Resource lookup template.
/// Replace `{count}`, `{topic}` and `{level}` before sending.
const RESOURCES_PROMPT_TEMPLATE: &str = r#"Recommend {count} real learning resources for: "{topic}" at {level} level.
Target audience: Indian tech professionals.

Include a mix of YouTube playlists/channels AND Coursera courses where applicable.
Use real, existing resources with accurate URLs.

Return ONLY a JSON array:
[
  {
    "title": "<resource title>",
    "type": "<youtube|coursera|article|practice>",
    "url": "<real URL>",
    "duration": "<time>",
    "difficulty": "<beginner|intermediate|advanced>",
    "why": "<why this resource is great for this topic>"
  }
]"#;

pub fn build_generate_prompt(
    target_role: &str,
    quiz_scores: &[QuizScore],
    current_skills: &[String],
    weekly_hours: u32,
) -> String {
    let scores_text = if quiz_scores.is_empty() {
        "No quiz scores yet — generate a balanced path.".to_string()
    } else {
        let listed: Vec<String> = quiz_scores
            .iter()
            .map(|s| format!("{}: {}%", s.domain, s.score))
            .collect();
        format!("Quiz scores: {}", listed.join(", "))
    };

    let skills_text = if current_skills.is_empty() {
        String::new()
    } else {
        format!("Current skills: {}", current_skills.join(", "))
    };

    GENERATE_PROMPT_TEMPLATE
        .replace("{target_role}", target_role)
        .replace("{scores_text}", &scores_text)
        .replace("{skills_text}", &skills_text)
        .replace("{weekly_hours}", &weekly_hours.to_string())
        .replace("{adapted}", if quiz_scores.is_empty() { "false" } else { "true" })
}

pub fn build_adapt_prompt(current_path: &serde_json::Value, new_quiz: &QuizScore) -> String {
    let path_json = serde_json::to_string_pretty(current_path).unwrap_or_default();
    let path_json = crate::llm_client::prompts::truncate_chars(&path_json, CURRENT_PATH_BUDGET);

    ADAPT_PROMPT_TEMPLATE
        .replace("{domain}", &new_quiz.domain)
        .replace("{score}", &new_quiz.score.to_string())
        .replace("{current_path}", path_json)
}

pub fn build_resources_prompt(topic: &str, level: &str, count: u32) -> String {
    RESOURCES_PROMPT_TEMPLATE
        .replace("{count}", &count.to_string())
        .replace("{topic}", topic)
        .replace("{level}", level)
}
