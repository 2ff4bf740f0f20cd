//! Log-only handling of notification and sync activity

use async_trait::async_trait;
use gt_domain::error::Result;
use gt_domain::events::{DomainEvent, EventName};
use gt_domain::ports::EventHandler;
use tracing::info;

/// Records delivered notifications and sync requests in the log
#[derive(Debug, Default)]
pub struct ActivityLogHandler;

impl ActivityLogHandler {
    /// Handler name used in logs
    pub const NAME: &'static str = "activity-log";

    /// Events this handler is registered for
    pub const EVENTS: &'static [EventName] =
        &[EventName::NotificationSent, EventName::SyncTriggered];
}

#[async_trait]
impl EventHandler for ActivityLogHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn handle(&self, event: &DomainEvent) -> Result<()> {
        match event {
            DomainEvent::NotificationSent { user_id, kind, .. } => {
                info!(user_id = %user_id, kind = %kind, "Notification sent");
            }
            DomainEvent::SyncTriggered { source, timestamp } => {
                info!(source = %source, timestamp = %timestamp, "Sync triggered");
            }
            DomainEvent::GoalCreated { .. }
            | DomainEvent::GoalUpdated { .. }
            | DomainEvent::GoalDeleted { .. }
            | DomainEvent::GoalCompleted { .. }
            | DomainEvent::TaskCreated { .. }
            | DomainEvent::TaskUpdated { .. }
            | DomainEvent::TaskDeleted { .. }
            | DomainEvent::TaskCompleted { .. }
            | DomainEvent::TaskAssigned { .. } => {}
        }
        Ok(())
    }
}
