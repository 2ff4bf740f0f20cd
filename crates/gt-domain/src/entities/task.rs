use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

/// A task belonging to a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Task identifier
    pub id: String,
    /// Parent goal
    pub goal_id: String,
    /// Title
    pub title: String,
    /// Assignee, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// Completion instant, set once the task is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a pending, unassigned task
    pub fn new(id: impl Into<String>, goal_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            goal_id: goal_id.into(),
            title: title.into(),
            assigned_to: None,
            status: TaskStatus::Pending,
            completed_at: None,
        }
    }

    /// Mark the task as completed at `at`
    pub fn complete(mut self, at: DateTime<Utc>) -> Self {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
        self
    }
}
