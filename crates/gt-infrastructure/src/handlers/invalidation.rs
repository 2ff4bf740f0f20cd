//! Cache invalidation on goal and task mutations
//!
//! List-shaped read-models are deleted and rebuilt lazily by the next
//! cache-aside read. Single entities are deleted on update/delete, and
//! re-read from the repository on completion so the completed state is
//! served warm.

use crate::cache::{CacheKey, CacheStore};
use async_trait::async_trait;
use gt_domain::error::Result;
use gt_domain::events::{DomainEvent, EventName};
use gt_domain::ports::EventHandler;
use gt_domain::repositories::{GoalRepository, TaskRepository};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Keeps goal/task caches consistent with committed mutations
pub struct CacheInvalidationHandler {
    cache: Arc<CacheStore>,
    goals: Arc<dyn GoalRepository>,
    tasks: Arc<dyn TaskRepository>,
    refresh_ttl: Duration,
}

impl CacheInvalidationHandler {
    /// Handler name used in logs
    pub const NAME: &'static str = "cache-invalidation";

    /// Events this handler is registered for
    pub const EVENTS: &'static [EventName] = &[
        EventName::GoalCreated,
        EventName::GoalUpdated,
        EventName::GoalDeleted,
        EventName::GoalCompleted,
        EventName::TaskCreated,
        EventName::TaskUpdated,
        EventName::TaskDeleted,
        EventName::TaskCompleted,
    ];

    /// Create the handler; refreshed entities are stored for `refresh_ttl`
    pub fn new(
        cache: Arc<CacheStore>,
        goals: Arc<dyn GoalRepository>,
        tasks: Arc<dyn TaskRepository>,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            cache,
            goals,
            tasks,
            refresh_ttl,
        }
    }

    async fn invalidate(&self, key: String) {
        let removed = self.cache.delete(&key).await;
        debug!(key = %key, removed, "Invalidated cache entry");
    }

    async fn refresh_goal(&self, goal_id: &str) -> Result<()> {
        let key = CacheKey::goal(goal_id);
        match self.goals.find_by_id(goal_id).await? {
            Some(goal) => self.cache.set(&key, &goal, Some(self.refresh_ttl)).await,
            // Gone from the system of record: drop the stale copy
            None => self.invalidate(key).await,
        }
        Ok(())
    }

    async fn refresh_task(&self, task_id: &str) -> Result<()> {
        let key = CacheKey::task(task_id);
        match self.tasks.find_by_id(task_id).await? {
            Some(task) => self.cache.set(&key, &task, Some(self.refresh_ttl)).await,
            None => self.invalidate(key).await,
        }
        Ok(())
    }
}

#[async_trait]
impl EventHandler for CacheInvalidationHandler {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn handle(&self, event: &DomainEvent) -> Result<()> {
        match event {
            DomainEvent::GoalCreated { user_id, .. } => {
                self.invalidate(CacheKey::goals_for_user(user_id)).await;
            }
            DomainEvent::GoalUpdated { goal_id, .. } | DomainEvent::GoalDeleted { goal_id } => {
                self.invalidate(CacheKey::goal(goal_id)).await;
            }
            DomainEvent::GoalCompleted { goal_id, .. } => self.refresh_goal(goal_id).await?,
            DomainEvent::TaskCreated { goal_id, .. } => {
                self.invalidate(CacheKey::tasks_for_goal(goal_id)).await;
            }
            DomainEvent::TaskUpdated { task_id, .. } | DomainEvent::TaskDeleted { task_id } => {
                self.invalidate(CacheKey::task(task_id)).await;
            }
            DomainEvent::TaskCompleted { task_id, .. } => self.refresh_task(task_id).await?,
            DomainEvent::TaskAssigned { .. }
            | DomainEvent::NotificationSent { .. }
            | DomainEvent::SyncTriggered { .. } => {}
        }
        Ok(())
    }
}
