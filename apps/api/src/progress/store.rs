//! In-memory progress store.
//!
//! Records are created lazily: `get` on an unknown user returns the default
//! record without persisting it; the first update initializes the entry and
//! applies in place, all under one write guard.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::progress::update::{apply, UpdateValue};

pub const SKILL_BAR_CATEGORIES: [&str; 5] =
    ["Frontend", "Backend", "System Design", "DevOps", "ML / AI"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    pub ats_score: i64,
    pub skills_added: i64,
    pub interviews_done: i64,
    pub quiz_scores: BTreeMap<String, i64>,
    pub skill_bars: BTreeMap<String, i64>,
    pub sessions: Vec<Value>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        ProgressRecord {
            ats_score: 0,
            skills_added: 0,
            interviews_done: 0,
            quiz_scores: BTreeMap::new(),
            skill_bars: SKILL_BAR_CATEGORIES
                .iter()
                .map(|&category| (category.to_string(), 0))
                .collect(),
            sessions: vec![],
        }
    }
}

#[derive(Default)]
pub struct ProgressStore {
    records: RwLock<HashMap<String, ProgressRecord>>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the user's record, or the defaults for a user never written.
    pub fn get(&self, user_id: &str) -> Result<ProgressRecord, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::Internal(anyhow!("progress store lock poisoned")))?;
        Ok(records.get(user_id).cloned().unwrap_or_default())
    }

    /// Initializes the entry if absent, applies the update, and returns the
    /// updated record. The whole read-modify-write happens under one write
    /// guard, so concurrent updates to the same user serialize.
    pub fn update(
        &self,
        user_id: &str,
        field: &str,
        value: UpdateValue,
    ) -> Result<ProgressRecord, AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::Internal(anyhow!("progress store lock poisoned")))?;
        let record = records.entry(user_id.to_string()).or_default();
        apply(record, field, value)?;
        Ok(record.clone())
    }
}
