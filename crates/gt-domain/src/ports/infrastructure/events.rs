//! Event Bus Ports
//!
//! [`EventHandler`] is the subscriber side of the bus and [`EventPublisher`]
//! the producer side. Domain code only depends on these traits; the in-process
//! implementation lives in `gt-providers`.
//!
//! ```no_run
//! use gt_domain::ports::EventPublisher;
//! use gt_domain::DomainEvent;
//!
//! async fn goal_deleted(bus: &dyn EventPublisher, goal_id: &str) {
//!     // Cache effects are applied before this returns
//!     bus.publish_and_wait(DomainEvent::GoalDeleted {
//!         goal_id: goal_id.to_string(),
//!     })
//!     .await;
//! }
//! ```

use crate::error::Result;
use crate::events::DomainEvent;
use async_trait::async_trait;
use std::sync::Arc;

/// Subscriber callback registered on the event bus
///
/// A failing handler is logged at the dispatch site and never affects the
/// publisher or sibling handlers.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// React to an event
    async fn handle(&self, event: &DomainEvent) -> Result<()>;
}

/// Shared handler reference, as stored in the subscriber registry
pub type SharedEventHandler = Arc<dyn EventHandler>;

/// Outcome of an awaited dispatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSummary {
    /// Handlers invoked
    pub delivered: usize,
    /// Handlers that returned an error or panicked
    pub failed: usize,
}

impl DispatchSummary {
    /// Whether at least one subscriber existed
    pub fn had_subscribers(&self) -> bool {
        self.delivered > 0
    }
}

/// Producer side of the event bus
///
/// The two dispatch kinds are separate methods so call sites declare whether
/// they need cache effects applied before continuing.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Fire-and-forget fan-out
    ///
    /// Returns whether at least one subscriber existed.
    fn publish(&self, event: DomainEvent) -> bool;

    /// Sequential fan-out, awaiting each handler before invoking the next
    async fn publish_and_wait(&self, event: DomainEvent) -> DispatchSummary;
}
