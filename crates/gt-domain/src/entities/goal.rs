use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    /// Open and being worked on
    #[default]
    Active,
    /// All work done
    Completed,
    /// Abandoned
    Archived,
}

/// A user goal as stored in the system of record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Goal identifier
    pub id: String,
    /// Owner
    pub user_id: String,
    /// Title
    pub title: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current status
    #[serde(default)]
    pub status: GoalStatus,
    /// Completion instant, set once the goal is completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Goal {
    /// Create an active goal
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            description: None,
            status: GoalStatus::Active,
            completed_at: None,
        }
    }

    /// Mark the goal as completed at `at`
    pub fn complete(mut self, at: DateTime<Utc>) -> Self {
        self.status = GoalStatus::Completed;
        self.completed_at = Some(at);
        self
    }
}
