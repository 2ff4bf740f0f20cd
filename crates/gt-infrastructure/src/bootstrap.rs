//! Process wiring
//!
//! Builds the one cache store and the one event bus a process uses, and
//! registers the invalidation handlers on the bus. Consumers receive the
//! `Arc`s from [`AppContext`]; nothing is reachable through a global.
//!
//! ## Example
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let collaborators = Collaborators::new(
//!     Arc::new(PgGoalRepository::new(pool.clone())),
//!     Arc::new(PgTaskRepository::new(pool)),
//! )
//! .with_notifier(Arc::new(PushNotificationSender::new(gateway)));
//! let ctx = AppContext::bootstrap(config, collaborators).await?;
//!
//! ctx.bus().publish(DomainEvent::GoalDeleted { goal_id: "g1".into() });
//! ```

use crate::cache::{CacheStore, create_cache_provider};
use crate::config::AppConfig;
use crate::handlers::InvalidationHandlers;
use crate::logging::log_health_check;
use gt_domain::error::Result;
use gt_domain::ports::NotificationSender;
use gt_domain::repositories::{GoalRepository, TaskRepository};
use gt_providers::events::InProcessEventBus;
use gt_providers::notification::LoggingNotificationSender;
use std::sync::Arc;
use tracing::info;

/// External collaborators the handlers depend on
#[derive(Clone)]
pub struct Collaborators {
    /// Authoritative goal lookups for refresh-on-completion
    pub goals: Arc<dyn GoalRepository>,
    /// Authoritative task lookups for refresh-on-completion
    pub tasks: Arc<dyn TaskRepository>,
    /// Best-effort user notifications
    pub notifier: Arc<dyn NotificationSender>,
}

impl Collaborators {
    /// Repositories with notifications written to the log
    pub fn new(goals: Arc<dyn GoalRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self {
            goals,
            tasks,
            notifier: Arc::new(LoggingNotificationSender::new()),
        }
    }

    /// Replace the notification sender
    pub fn with_notifier(mut self, notifier: Arc<dyn NotificationSender>) -> Self {
        self.notifier = notifier;
        self
    }
}

/// Shared cache store, event bus and registered handlers of a process
#[derive(Debug, Clone)]
pub struct AppContext {
    config: AppConfig,
    cache: Arc<CacheStore>,
    bus: Arc<InProcessEventBus>,
    handlers: InvalidationHandlers,
}

impl AppContext {
    /// Build and wire the cache store and event bus
    ///
    /// An unreachable cache backend does not fail startup: the health check
    /// logs the outage and the store degrades to always-miss.
    pub async fn bootstrap(config: AppConfig, collaborators: Collaborators) -> Result<Self> {
        let provider = create_cache_provider(&config.cache)?;
        let cache = Arc::new(CacheStore::new(
            provider,
            config.cache.namespace.clone(),
            config.cache.default_ttl(),
        ));

        let healthy = cache.health_check().await;
        log_health_check(
            "cache",
            healthy,
            Some("cache backend unreachable, serving from system of record"),
        );

        let bus = Arc::new(InProcessEventBus::with_max_listeners(
            config.event_bus.max_listeners,
        ));

        let handlers = InvalidationHandlers::new(
            Arc::clone(&cache),
            collaborators.goals,
            collaborators.tasks,
            collaborators.notifier,
            config.cache.refresh_ttl(),
        );
        handlers.register(&bus);

        info!(
            provider = cache.provider_name(),
            namespace = cache.namespace(),
            events = bus.event_names().len(),
            "Cache consistency layer ready"
        );

        Ok(Self {
            config,
            cache,
            bus,
            handlers,
        })
    }

    /// Configuration the context was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The process-wide cache store
    pub fn cache(&self) -> Arc<CacheStore> {
        Arc::clone(&self.cache)
    }

    /// The process-wide event bus
    pub fn bus(&self) -> Arc<InProcessEventBus> {
        Arc::clone(&self.bus)
    }

    /// Handlers registered on [`bus`](Self::bus)
    pub fn handlers(&self) -> &InvalidationHandlers {
        &self.handlers
    }
}
