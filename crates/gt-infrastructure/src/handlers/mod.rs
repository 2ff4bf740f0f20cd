//! Event handlers and their bindings
//!
//! | Event | Cache effect | Secondary effect |
//! |---|---|---|
//! | `goal:created` | delete `goals:user:{userId}` | notify owner |
//! | `goal:updated`, `goal:deleted` | delete `goal:{goalId}` | |
//! | `goal:completed` | refresh `goal:{goalId}` | |
//! | `task:created` | delete `tasks:goal:{goalId}` | |
//! | `task:updated`, `task:deleted` | delete `task:{taskId}` | |
//! | `task:completed` | refresh `task:{taskId}` | |
//! | `task:assigned` | | notify assignee |
//! | `notification:sent`, `sync:triggered` | | log |
//!
//! Cache effects and notifications are separate registrations, so a failed
//! notification never prevents the invalidation (and vice versa).

pub mod activity;
pub mod invalidation;
pub mod notification;

pub use activity::ActivityLogHandler;
pub use invalidation::CacheInvalidationHandler;
pub use notification::UserNotificationHandler;

use crate::cache::CacheStore;
use gt_domain::events::EventName;
use gt_domain::ports::{NotificationSender, SharedEventHandler};
use gt_domain::repositories::{GoalRepository, TaskRepository};
use gt_providers::events::InProcessEventBus;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// The handler set wired at startup
#[derive(Clone)]
pub struct InvalidationHandlers {
    cache_invalidation: SharedEventHandler,
    user_notification: SharedEventHandler,
    activity_log: SharedEventHandler,
}

impl InvalidationHandlers {
    /// Build the handlers over their collaborators
    pub fn new(
        cache: Arc<CacheStore>,
        goals: Arc<dyn GoalRepository>,
        tasks: Arc<dyn TaskRepository>,
        notifier: Arc<dyn NotificationSender>,
        refresh_ttl: Duration,
    ) -> Self {
        Self {
            cache_invalidation: Arc::new(CacheInvalidationHandler::new(
                cache,
                goals,
                tasks,
                refresh_ttl,
            )),
            user_notification: Arc::new(UserNotificationHandler::new(notifier)),
            activity_log: Arc::new(ActivityLogHandler),
        }
    }

    /// Every (event, handler) pair, in registration order
    pub fn bindings(&self) -> Vec<(EventName, SharedEventHandler)> {
        let groups = [
            (CacheInvalidationHandler::EVENTS, &self.cache_invalidation),
            (UserNotificationHandler::EVENTS, &self.user_notification),
            (ActivityLogHandler::EVENTS, &self.activity_log),
        ];

        groups
            .into_iter()
            .flat_map(|(events, handler)| {
                events
                    .iter()
                    .map(move |event| (*event, Arc::clone(handler)))
            })
            .collect()
    }

    /// Subscribe every binding on `bus`
    pub fn register(&self, bus: &InProcessEventBus) {
        let bindings = self.bindings();
        let count = bindings.len();
        for (event, handler) in bindings {
            bus.subscribe(event, handler);
        }
        info!(bindings = count, "Event handlers registered");
    }

    /// Remove exactly the registrations made by [`register`](Self::register)
    pub fn unregister(&self, bus: &InProcessEventBus) {
        for (event, handler) in self.bindings() {
            bus.unsubscribe(event, &handler);
        }
    }
}

impl std::fmt::Debug for InvalidationHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InvalidationHandlers")
            .field("cache_invalidation", &self.cache_invalidation.name())
            .field("user_notification", &self.user_notification.name())
            .field("activity_log", &self.activity_log.name())
            .finish()
    }
}
