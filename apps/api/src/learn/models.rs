//! Shared learning-path data types.

use serde::{Deserialize, Serialize};

/// A quiz result handed in with a path request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizScore {
    pub domain: String,
    pub score: i64,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

/// A recommended learning resource.
/// `kind` is one of youtube | coursera | article | practice;
/// `difficulty` is beginner | intermediate | advanced. Both are advisory
/// vocabulary the prompt pins down — the model's word is taken as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub duration: String,
    pub difficulty: String,
    pub why: String,
}

/// One module of the learning path. Every field is model-written and
/// required — a module missing any of them fails the decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: i64,
    pub title: String,
    pub domain: String,
    pub priority: String,
    pub current_score: i64,
    pub target_score: i64,
    pub estimated_weeks: u32,
    pub why_this_now: String,
    pub milestone: String,
    pub resources: Vec<Resource>,
}

/// The full adaptive path returned to the client.
#[derive(Debug, Serialize)]
pub struct LearningPath {
    pub target_role: String,
    pub overall_readiness: i64,
    pub total_weeks: u32,
    pub adapted_from_scores: bool,
    pub modules: Vec<Module>,
    pub next_action: String,
    pub motivational_note: String,
}

/// Model-written half of a path reply. `modules` is required; scalar fields
/// are optional here because generate and adapt apply different defaults at
/// the coercion site.
#[derive(Debug, Deserialize)]
pub struct PathPayload {
    pub overall_readiness: Option<i64>,
    pub total_weeks: Option<u32>,
    pub next_action: Option<String>,
    pub motivational_note: Option<String>,
    pub modules: Vec<Module>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE_JSON: &str = r#"{
        "id": 1, "title": "System Design Basics", "domain": "System Design",
        "priority": "critical", "current_score": 35, "target_score": 75,
        "estimated_weeks": 3, "why_this_now": "Weakest scored domain.",
        "milestone": "Design a URL shortener end to end.",
        "resources": [{
            "title": "Gaurav Sen playlist", "type": "youtube",
            "url": "https://youtube.com/playlist", "duration": "8h",
            "difficulty": "intermediate", "why": "Clear fundamentals."
        }]
    }"#;

    #[test]
    fn test_module_decodes_with_renamed_resource_kind() {
        let module: Module = serde_json::from_str(MODULE_JSON).unwrap();
        assert_eq!(module.resources[0].kind, "youtube");
    }

    #[test]
    fn test_resource_kind_serializes_as_type() {
        let module: Module = serde_json::from_str(MODULE_JSON).unwrap();
        let value = serde_json::to_value(&module.resources[0]).unwrap();
        assert_eq!(value["type"], "youtube");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_path_payload_requires_modules() {
        assert!(serde_json::from_str::<PathPayload>(r#"{"overall_readiness": 40}"#).is_err());
    }

    #[test]
    fn test_path_payload_scalars_optional() {
        let payload: PathPayload =
            serde_json::from_str(&format!(r#"{{"modules": [{MODULE_JSON}]}}"#)).unwrap();
        assert!(payload.overall_readiness.is_none());
        assert_eq!(payload.modules.len(), 1);
    }
}
