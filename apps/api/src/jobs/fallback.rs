//! Static fallback payloads served when the model reply cannot be parsed.

use crate::jobs::handlers::{Job, SalaryRanges, TrendsResponse};

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            title: "Senior SDE".to_string(),
            company: "Razorpay".to_string(),
            location: "Bengaluru".to_string(),
            salary: "₹28–38 LPA".to_string(),
            experience: "4–6 YOE".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "PostgreSQL".to_string(),
            ],
            kind: "Full Time".to_string(),
            icon: "🏢".to_string(),
            url: String::new(),
        },
        Job {
            title: "ML Engineer".to_string(),
            company: "Swiggy".to_string(),
            location: "Bengaluru".to_string(),
            salary: "₹22–32 LPA".to_string(),
            experience: "3–5 YOE".to_string(),
            skills: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "Spark".to_string(),
            ],
            kind: "Full Time".to_string(),
            icon: "🚀".to_string(),
            url: String::new(),
        },
        Job {
            title: "Backend SDE".to_string(),
            company: "CRED".to_string(),
            location: "Mumbai".to_string(),
            salary: "₹18–26 LPA".to_string(),
            experience: "2–4 YOE".to_string(),
            skills: vec!["Go".to_string(), "Kafka".to_string(), "Redis".to_string()],
            kind: "Full Time".to_string(),
            icon: "💳".to_string(),
            url: String::new(),
        },
    ]
}

pub fn trends() -> TrendsResponse {
    TrendsResponse {
        hot_roles: vec![
            "AI/ML Engineer".to_string(),
            "Full Stack Developer".to_string(),
            "DevOps Engineer".to_string(),
            "Data Scientist".to_string(),
            "Cloud Architect".to_string(),
        ],
        top_skills: vec![
            "Python".to_string(),
            "React".to_string(),
            "Kubernetes".to_string(),
            "LLM Fine-tuning".to_string(),
            "System Design".to_string(),
        ],
        salary_ranges: SalaryRanges {
            fresher: "₹5–10 LPA".to_string(),
            mid: "₹15–30 LPA".to_string(),
            senior: "₹35–60 LPA".to_string(),
        },
        insight: "AI and cloud roles are seeing 40% salary premium in 2025. \
                  Indian startups are aggressively hiring backend and ML engineers."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_jobs_non_empty_and_typed() {
        let jobs = jobs();
        assert!(!jobs.is_empty());
        for job in &jobs {
            assert!(!job.title.is_empty());
            assert!(!job.company.is_empty());
            assert!(!job.skills.is_empty());
        }
    }

    #[test]
    fn test_fallback_trends_non_empty() {
        let trends = trends();
        assert_eq!(trends.hot_roles.len(), 5);
        assert_eq!(trends.top_skills.len(), 5);
        assert!(!trends.insight.is_empty());
    }
}
