//! # Task Model
//!
//! The sole persisted entity: a task with a title, an optional description,
//! an importance flag, and an optional machine-generated summary.
//!
//! ## Database Schema
//!
//! Maps to the `tasks` table:
//! - `task_id`: Primary key (BIGSERIAL)
//! - `title`: Required text (VARCHAR, non-empty)
//! - `description`: Optional text (TEXT)
//! - `is_important`: Importance flag (BOOLEAN, default false)
//! - `summary`: AI-generated summary (TEXT, nullable)
//! - `created_at` / `updated_at`: Store-managed timestamps
//!
//! The summary column is only ever filled by the lifecycle engine after a
//! successful summarization, and only ever cleared by an explicit update
//! that sets it to null. Unsetting `is_important` leaves it in place.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A persisted task record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub task_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub is_important: bool,
    pub summary: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Task {
    /// Whether this task still needs a summary generated.
    ///
    /// The single decision point for summarization: important tasks with no
    /// usable summary. Both Create and Update route through this predicate.
    pub fn needs_summary(&self) -> bool {
        self.is_important
            && !matches!(self.summary.as_deref(), Some(s) if !s.trim().is_empty())
    }
}

/// New task for creation (without store-generated fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_important: bool,
}

/// Partial update for a task. Absent fields are left untouched.
///
/// `summary` is double-optional: absent leaves the stored summary alone,
/// explicit `null` clears it, and a string replaces it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_important: Option<bool>,
    #[serde(
        default,
        deserialize_with = "deserialize_explicit_null",
        skip_serializing_if = "Option::is_none"
    )]
    pub summary: Option<Option<String>>,
}

/// Distinguishes an absent field (outer `None`) from an explicit JSON null
/// (`Some(None)`).
fn deserialize_explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl TaskPatch {
    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.is_important.is_none()
            && self.summary.is_none()
    }

    /// Apply the present fields to a task in place. Used by stores that
    /// edit rows in application memory; the Postgres store expresses the
    /// same semantics in a single SQL statement.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(is_important) = self.is_important {
            task.is_important = is_important;
        }
        if let Some(summary) = &self.summary {
            task.summary = summary.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(is_important: bool, summary: Option<&str>) -> Task {
        let now = Utc::now().naive_utc();
        Task {
            task_id: 1,
            title: "Ship release".to_string(),
            description: Some("v2 rollout".to_string()),
            is_important,
            summary: summary.map(str::to_string),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_needs_summary_only_when_important_and_absent() {
        assert!(task(true, None).needs_summary());
        assert!(task(true, Some("")).needs_summary());
        assert!(task(true, Some("   ")).needs_summary());
        assert!(!task(true, Some("Deploy v2")).needs_summary());
        assert!(!task(false, None).needs_summary());
        assert!(!task(false, Some("Deploy v2")).needs_summary());
    }

    #[test]
    fn test_patch_absent_vs_null_vs_value() {
        let absent: TaskPatch = serde_json::from_str(r#"{"title": "New"}"#).unwrap();
        assert_eq!(absent.title.as_deref(), Some("New"));
        assert!(absent.summary.is_none());

        let cleared: TaskPatch = serde_json::from_str(r#"{"summary": null}"#).unwrap();
        assert_eq!(cleared.summary, Some(None));

        let replaced: TaskPatch = serde_json::from_str(r#"{"summary": "short"}"#).unwrap();
        assert_eq!(replaced.summary, Some(Some("short".to_string())));
    }

    #[test]
    fn test_patch_apply_to_leaves_absent_fields_untouched() {
        let mut t = task(true, Some("Deploy v2"));
        let patch: TaskPatch = serde_json::from_str(r#"{"description": "v2.1 rollout"}"#).unwrap();
        patch.apply_to(&mut t);
        assert_eq!(t.title, "Ship release");
        assert_eq!(t.description.as_deref(), Some("v2.1 rollout"));
        assert!(t.is_important);
        assert_eq!(t.summary.as_deref(), Some("Deploy v2"));
    }

    #[test]
    fn test_patch_apply_to_clears_summary_on_explicit_null() {
        let mut t = task(true, Some("Deploy v2"));
        let patch: TaskPatch = serde_json::from_str(r#"{"summary": null}"#).unwrap();
        patch.apply_to(&mut t);
        assert_eq!(t.summary, None);
    }

    #[test]
    fn test_patch_is_empty() {
        let patch: TaskPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }
}
