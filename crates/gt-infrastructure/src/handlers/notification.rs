//! User notifications triggered by domain events

use async_trait::async_trait;
use gt_domain::constants::{NOTIFICATION_GOAL_CREATED, NOTIFICATION_TASK_ASSIGNED};
use gt_domain::error::Result;
use gt_domain::events::{DomainEvent, EventName};
use gt_domain::ports::{EventHandler, Notification, NotificationSender};
use serde_json::json;
use std::sync::Arc;

/// Notifies goal owners and task assignees
pub struct UserNotificationHandler {
    sender: Arc<dyn NotificationSender>,
}

impl UserNotificationHandler {
    /// Handler name used in logs
    pub const NAME: &'static str = "user-notification";

    /// Events this handler is registered for
    pub const EVENTS: &'static [EventName] = &[EventName::GoalCreated, EventName::TaskAssigned];

    /// Create the handler
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl EventHandler for UserNotificationHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn handle(&self, event: &DomainEvent) -> Result<()> {
        let (recipient, notification) = match event {
            DomainEvent::GoalCreated {
                goal_id,
                title,
                user_id,
            } => (
                user_id,
                Notification::new(
                    NOTIFICATION_GOAL_CREATED,
                    format!("Goal \"{}\" has been created", title),
                )
                .with_data(json!({ "goalId": goal_id })),
            ),
            DomainEvent::TaskAssigned {
                task_id,
                assigned_to,
            } => (
                assigned_to,
                Notification::new(
                    NOTIFICATION_TASK_ASSIGNED,
                    "A new task has been assigned to you",
                )
                .with_data(json!({ "taskId": task_id })),
            ),
            DomainEvent::GoalUpdated { .. }
            | DomainEvent::GoalDeleted { .. }
            | DomainEvent::GoalCompleted { .. }
            | DomainEvent::TaskCreated { .. }
            | DomainEvent::TaskUpdated { .. }
            | DomainEvent::TaskDeleted { .. }
            | DomainEvent::TaskCompleted { .. }
            | DomainEvent::NotificationSent { .. }
            | DomainEvent::SyncTriggered { .. } => return Ok(()),
        };

        self.sender.send_notification(recipient, notification).await
    }
}
