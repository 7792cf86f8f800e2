// Task data model
// Defines the persisted Task record and the typed request bodies

use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Status column a task belongs to
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

/// A single kanban card record
///
/// `id` and `created_at` are assigned by the store on creation and never
/// change afterwards. The wire format uses camelCase to match the
/// persisted file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: Priority,
    pub status: Status,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    /// Merge present patch fields onto this task, shallowly
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// POST body for creating a task
#[derive(Debug, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: Status,
}

impl TaskDraft {
    /// Validate required fields before the draft reaches the store
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(())
    }
}

/// PUT body for partially updating a task
///
/// Absent fields are left untouched. `id` and `createdAt` are deliberately
/// not part of the patch.
#[derive(Debug, Deserialize, Default)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl TaskPatch {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err("title must not be empty".to_string());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
        let parsed: Status = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, Status::InProgress);
    }

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
        let parsed: Priority = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, Priority::High);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        assert!(serde_json::from_str::<Status>("\"archived\"").is_err());
        assert!(serde_json::from_str::<Priority>("\"urgent\"").is_err());
    }

    #[test]
    fn test_draft_defaults() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.status, Status::Todo);
        assert!(draft.description.is_none());
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_draft_blank_title_invalid() {
        let draft: TaskDraft = serde_json::from_str(r#"{"title":"  "}"#).unwrap();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_patch_merge_is_shallow() {
        let mut task = Task {
            id: 1,
            title: "A".to_string(),
            description: Some("keep me".to_string()),
            priority: Priority::Low,
            status: Status::Todo,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let patch: TaskPatch = serde_json::from_str(r#"{"status":"done"}"#).unwrap();
        task.apply(patch);
        assert_eq!(task.status, Status::Done);
        assert_eq!(task.title, "A");
        assert_eq!(task.description.as_deref(), Some("keep me"));
        assert_eq!(task.priority, Priority::Low);
    }

    #[test]
    fn test_task_json_round_trip() {
        let task = Task {
            id: 1_700_000_000_000,
            title: "Ship it".to_string(),
            description: None,
            priority: Priority::High,
            status: Status::InProgress,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        };
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"description\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
