//! Prompt construction for job listings and market trends.

/// Listings template.
/// Replace `{role_clause}` and `{location}` before sending.
const LIST_PROMPT_TEMPLATE: &str = r#"Generate 6 realistic tech job listings{role_clause} in {location}.
Focus on Indian tech companies (Swiggy, Razorpay, Zomato, Flipkart, CRED, PhonePe, etc.)
and FAANG India offices.

Return JSON:
{
  "jobs": [
    {
      "title": "<job title>",
      "company": "<company name>",
      "location": "<city, India>",
      "salary": "<salary range in LPA>",
      "experience": "<X-Y YOE>",
      "skills": ["<skill1>", "<skill2>", "<skill3>"],
      "type": "Full Time",
      "icon": "<relevant emoji>",
      "url": ""
    }
  ]
}"#;

pub const TRENDS_PROMPT: &str = r#"What are the current tech job market trends in India (2025-2026)?

Return JSON:
{
  "hot_roles": ["<role 1>", "<role 2>", "<role 3>", "<role 4>", "<role 5>"],
  "top_skills": ["<skill 1>", "<skill 2>", "<skill 3>", "<skill 4>", "<skill 5>"],
  "salary_ranges": {
    "fresher": "₹5–10 LPA",
    "mid": "₹15–30 LPA",
    "senior": "₹35–60 LPA"
  },
  "insight": "<2-sentence market insight>"
}"#;

pub fn build_list_prompt(role: &str, location: &str) -> String {
    let role_clause = if role.is_empty() {
        String::new()
    } else {
        format!(" for the role: {role}")
    };

    LIST_PROMPT_TEMPLATE
        .replace("{role_clause}", &role_clause)
        .replace("{location}", location)
}
