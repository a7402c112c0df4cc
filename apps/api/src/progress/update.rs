//! Typed progress updates.
//!
//! The wire shape is `{"field": "...", "value": <int | map | list | string>}`.
//! Instead of duck-typing the value against whatever currently sits in the
//! record, each incoming kind is a variant, and the (field, variant) pairing
//! decides the behavior: counters add, maps merge, the session list is
//! replaced. A mismatched pairing or an unknown field is a validation error.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::progress::store::ProgressRecord;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum UpdateValue {
    /// Added onto a counter field.
    NumberDelta(i64),
    /// Merged into a score map; incoming keys overwrite, others survive.
    MapMerge(BTreeMap<String, i64>),
    /// Replaces the session list wholesale.
    ListReplace(Vec<Value>),
    /// Accepted on the wire, but no typed field takes a bare string.
    ScalarReplace(String),
}

impl UpdateValue {
    fn kind(&self) -> &'static str {
        match self {
            UpdateValue::NumberDelta(_) => "number",
            UpdateValue::MapMerge(_) => "map",
            UpdateValue::ListReplace(_) => "list",
            UpdateValue::ScalarReplace(_) => "string",
        }
    }
}

/// Applies one update to the record in place.
pub fn apply(record: &mut ProgressRecord, field: &str, value: UpdateValue) -> Result<(), AppError> {
    match (field, value) {
        ("ats_score", UpdateValue::NumberDelta(n)) => record.ats_score += n,
        ("skills_added", UpdateValue::NumberDelta(n)) => record.skills_added += n,
        ("interviews_done", UpdateValue::NumberDelta(n)) => record.interviews_done += n,
        ("quiz_scores", UpdateValue::MapMerge(m)) => record.quiz_scores.extend(m),
        ("skill_bars", UpdateValue::MapMerge(m)) => record.skill_bars.extend(m),
        ("sessions", UpdateValue::ListReplace(l)) => record.sessions = l,
        (
            field @ ("ats_score" | "skills_added" | "interviews_done" | "quiz_scores"
            | "skill_bars" | "sessions"),
            value,
        ) => {
            return Err(AppError::Validation(format!(
                "Field '{field}' cannot take a {} value",
                value.kind()
            )));
        }
        (field, _) => {
            return Err(AppError::Validation(format!(
                "Unknown progress field '{field}'"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_delta_adds_to_default() {
        let mut record = ProgressRecord::default();
        apply(&mut record, "ats_score", UpdateValue::NumberDelta(72)).unwrap();
        assert_eq!(record.ats_score, 72);
        apply(&mut record, "ats_score", UpdateValue::NumberDelta(3)).unwrap();
        assert_eq!(record.ats_score, 75);
    }

    #[test]
    fn test_map_merge_preserves_existing_keys() {
        let mut record = ProgressRecord::default();
        record.quiz_scores.insert("React".to_string(), 60);
        record.quiz_scores.insert("DevOps".to_string(), 40);

        let update = BTreeMap::from([("React".to_string(), 85)]);
        apply(&mut record, "quiz_scores", UpdateValue::MapMerge(update)).unwrap();

        assert_eq!(record.quiz_scores["React"], 85);
        assert_eq!(record.quiz_scores["DevOps"], 40);
    }

    #[test]
    fn test_skill_bars_merge_overwrites_defaults() {
        let mut record = ProgressRecord::default();
        let update = BTreeMap::from([("Backend".to_string(), 55)]);
        apply(&mut record, "skill_bars", UpdateValue::MapMerge(update)).unwrap();
        assert_eq!(record.skill_bars["Backend"], 55);
        assert_eq!(record.skill_bars["Frontend"], 0);
    }

    #[test]
    fn test_sessions_replaced_wholesale() {
        let mut record = ProgressRecord::default();
        record.sessions = vec![serde_json::json!({"kind": "quiz"})];
        let incoming = vec![serde_json::json!({"kind": "interview"})];
        apply(&mut record, "sessions", UpdateValue::ListReplace(incoming)).unwrap();
        assert_eq!(record.sessions.len(), 1);
        assert_eq!(record.sessions[0]["kind"], "interview");
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut record = ProgressRecord::default();
        let err = apply(
            &mut record,
            "quiz_scores",
            UpdateValue::NumberDelta(10),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut record = ProgressRecord::default();
        let err = apply(&mut record, "is_admin", UpdateValue::NumberDelta(1)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_string_value_matches_no_field() {
        let mut record = ProgressRecord::default();
        let err = apply(
            &mut record,
            "sessions",
            UpdateValue::ScalarReplace("oops".to_string()),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_update_value_decodes_by_shape() {
        assert!(matches!(
            serde_json::from_str::<UpdateValue>("7").unwrap(),
            UpdateValue::NumberDelta(7)
        ));
        assert!(matches!(
            serde_json::from_str::<UpdateValue>(r#"{"React": 80}"#).unwrap(),
            UpdateValue::MapMerge(_)
        ));
        assert!(matches!(
            serde_json::from_str::<UpdateValue>(r#"[1, 2]"#).unwrap(),
            UpdateValue::ListReplace(_)
        ));
        assert!(matches!(
            serde_json::from_str::<UpdateValue>(r#""text""#).unwrap(),
            UpdateValue::ScalarReplace(_)
        ));
    }
}
