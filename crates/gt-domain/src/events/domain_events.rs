//! Domain event definitions
//!
//! Every mutation of a goal or task that commits to the system of record is
//! announced as a [`DomainEvent`]. The set of events is closed: each variant
//! carries exactly the payload its [`EventName`] is associated with, so
//! consumers can match exhaustively.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Identifier of a domain event, independent of its payload
///
/// Used as the key of the subscriber registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventName {
    /// `goal:created`
    #[serde(rename = "goal:created")]
    GoalCreated,
    /// `goal:updated`
    #[serde(rename = "goal:updated")]
    GoalUpdated,
    /// `goal:deleted`
    #[serde(rename = "goal:deleted")]
    GoalDeleted,
    /// `goal:completed`
    #[serde(rename = "goal:completed")]
    GoalCompleted,
    /// `task:created`
    #[serde(rename = "task:created")]
    TaskCreated,
    /// `task:updated`
    #[serde(rename = "task:updated")]
    TaskUpdated,
    /// `task:deleted`
    #[serde(rename = "task:deleted")]
    TaskDeleted,
    /// `task:completed`
    #[serde(rename = "task:completed")]
    TaskCompleted,
    /// `task:assigned`
    #[serde(rename = "task:assigned")]
    TaskAssigned,
    /// `notification:sent`
    #[serde(rename = "notification:sent")]
    NotificationSent,
    /// `sync:triggered`
    #[serde(rename = "sync:triggered")]
    SyncTriggered,
}

impl EventName {
    /// All event names, in declaration order
    pub const ALL: [EventName; 11] = [
        EventName::GoalCreated,
        EventName::GoalUpdated,
        EventName::GoalDeleted,
        EventName::GoalCompleted,
        EventName::TaskCreated,
        EventName::TaskUpdated,
        EventName::TaskDeleted,
        EventName::TaskCompleted,
        EventName::TaskAssigned,
        EventName::NotificationSent,
        EventName::SyncTriggered,
    ];

    /// Wire-style identifier (e.g. `goal:completed`)
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::GoalCreated => "goal:created",
            EventName::GoalUpdated => "goal:updated",
            EventName::GoalDeleted => "goal:deleted",
            EventName::GoalCompleted => "goal:completed",
            EventName::TaskCreated => "task:created",
            EventName::TaskUpdated => "task:updated",
            EventName::TaskDeleted => "task:deleted",
            EventName::TaskCompleted => "task:completed",
            EventName::TaskAssigned => "task:assigned",
            EventName::NotificationSent => "notification:sent",
            EventName::SyncTriggered => "sync:triggered",
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| Error::invalid_argument(format!("Unknown event name: {s}")))
    }
}

/// Goal and task lifecycle events
///
/// Payloads are immutable facts. There is no sequence number or delivery id:
/// ordering is emission order only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all_fields = "camelCase")]
pub enum DomainEvent {
    /// A goal was created for a user
    #[serde(rename = "goal:created")]
    GoalCreated {
        /// Goal identifier
        goal_id: String,
        /// Goal title
        title: String,
        /// Owner of the goal
        user_id: String,
    },
    /// Goal fields changed
    #[serde(rename = "goal:updated")]
    GoalUpdated {
        /// Goal identifier
        goal_id: String,
        /// Changed fields and their new values
        changes: Map<String, Value>,
    },
    /// A goal was deleted
    #[serde(rename = "goal:deleted")]
    GoalDeleted {
        /// Goal identifier
        goal_id: String,
    },
    /// A goal transitioned to completed
    #[serde(rename = "goal:completed")]
    GoalCompleted {
        /// Goal identifier
        goal_id: String,
        /// Completion instant
        completed_at: DateTime<Utc>,
    },
    /// A task was created under a goal
    #[serde(rename = "task:created")]
    TaskCreated {
        /// Task identifier
        task_id: String,
        /// Parent goal
        goal_id: String,
        /// Task title
        title: String,
    },
    /// Task fields changed
    #[serde(rename = "task:updated")]
    TaskUpdated {
        /// Task identifier
        task_id: String,
        /// Changed fields and their new values
        changes: Map<String, Value>,
    },
    /// A task was deleted
    #[serde(rename = "task:deleted")]
    TaskDeleted {
        /// Task identifier
        task_id: String,
    },
    /// A task transitioned to completed
    #[serde(rename = "task:completed")]
    TaskCompleted {
        /// Task identifier
        task_id: String,
        /// Completion instant
        completed_at: DateTime<Utc>,
    },
    /// A task was assigned to a user
    #[serde(rename = "task:assigned")]
    TaskAssigned {
        /// Task identifier
        task_id: String,
        /// Assignee user id
        assigned_to: String,
    },
    /// A notification was delivered to a user
    #[serde(rename = "notification:sent")]
    NotificationSent {
        /// Recipient
        user_id: String,
        /// Notification type (e.g. `goal_created`)
        #[serde(rename = "type")]
        kind: String,
        /// Human readable message
        message: String,
    },
    /// An external synchronization was requested
    #[serde(rename = "sync:triggered")]
    SyncTriggered {
        /// Origin of the sync request
        source: String,
        /// When the sync was requested
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent {
    /// Name under which subscribers for this event are registered
    pub fn name(&self) -> EventName {
        match self {
            DomainEvent::GoalCreated { .. } => EventName::GoalCreated,
            DomainEvent::GoalUpdated { .. } => EventName::GoalUpdated,
            DomainEvent::GoalDeleted { .. } => EventName::GoalDeleted,
            DomainEvent::GoalCompleted { .. } => EventName::GoalCompleted,
            DomainEvent::TaskCreated { .. } => EventName::TaskCreated,
            DomainEvent::TaskUpdated { .. } => EventName::TaskUpdated,
            DomainEvent::TaskDeleted { .. } => EventName::TaskDeleted,
            DomainEvent::TaskCompleted { .. } => EventName::TaskCompleted,
            DomainEvent::TaskAssigned { .. } => EventName::TaskAssigned,
            DomainEvent::NotificationSent { .. } => EventName::NotificationSent,
            DomainEvent::SyncTriggered { .. } => EventName::SyncTriggered,
        }
    }
}
