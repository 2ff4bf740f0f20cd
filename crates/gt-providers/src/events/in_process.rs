//! In-process event bus
//!
//! Ordered subscriber registry keyed by [`EventName`], with two dispatch
//! kinds:
//!
//! - [`InProcessEventBus::publish`]: fire-and-forget. Handlers are started in
//!   registration order on a spawned task and run interleaved; the publisher
//!   does not wait for them.
//! - [`InProcessEventBus::publish_and_wait`]: handlers run one after another,
//!   each awaited before the next starts.
//!
//! ## Rules
//! - **Isolation**: an error or panic in one handler is logged with the event
//!   name and never reaches the publisher or sibling handlers.
//! - **No redelivery**: a failed handler is not retried.
//! - **Explicit registry**: only `subscribe`/`unsubscribe`/`unsubscribe_all`
//!   mutate the registry; dispatch works on a snapshot.
//!
//! ## Example
//!
//! ```ignore
//! use gt_providers::events::InProcessEventBus;
//!
//! let bus = InProcessEventBus::new();
//! bus.subscribe(EventName::GoalDeleted, handler.clone());
//! bus.publish_and_wait(DomainEvent::GoalDeleted { goal_id: "g1".into() }).await;
//! ```

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::join_all;
use gt_domain::constants::DEFAULT_MAX_LISTENERS;
use gt_domain::events::{DomainEvent, EventName};
use gt_domain::ports::{DispatchSummary, EventHandler, EventPublisher, SharedEventHandler};
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, error, warn};

/// Event bus backed by an in-memory subscriber registry
///
/// Construct once at startup and share it behind an `Arc`.
pub struct InProcessEventBus {
    registry: RwLock<BTreeMap<EventName, Vec<SharedEventHandler>>>,
    max_listeners: usize,
}

impl InProcessEventBus {
    /// Create a bus with the default listener soft cap
    pub fn new() -> Self {
        Self::with_max_listeners(DEFAULT_MAX_LISTENERS)
    }

    /// Create a bus that warns once an event has more than `max_listeners`
    /// handlers. The cap is diagnostic only; registration always succeeds.
    pub fn with_max_listeners(max_listeners: usize) -> Self {
        Self {
            registry: RwLock::new(BTreeMap::new()),
            max_listeners,
        }
    }

    /// Append `handler` to the ordered list for `event`
    ///
    /// Registering the same handler twice yields two invocations.
    pub fn subscribe(&self, event: EventName, handler: SharedEventHandler) {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let handlers = registry.entry(event).or_default();
        handlers.push(handler);

        if handlers.len() == self.max_listeners + 1 {
            warn!(
                event = %event,
                listeners = handlers.len(),
                max_listeners = self.max_listeners,
                "Possible subscriber leak: listener count exceeds soft cap"
            );
        }
    }

    /// Remove the first registration of `handler` for `event`
    ///
    /// Returns false (and changes nothing) when it was not registered.
    pub fn unsubscribe(&self, event: EventName, handler: &SharedEventHandler) -> bool {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let Some(handlers) = registry.get_mut(&event) else {
            return false;
        };
        let Some(position) = handlers.iter().position(|h| same_handler(h, handler)) else {
            return false;
        };

        handlers.remove(position);
        if handlers.is_empty() {
            registry.remove(&event);
        }
        true
    }

    /// Clear the handlers of one event, or of every event when `None`
    pub fn unsubscribe_all(&self, event: Option<EventName>) {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        match event {
            Some(event) => {
                registry.remove(&event);
            }
            None => registry.clear(),
        }
    }

    /// Number of handlers registered for `event`
    pub fn listener_count(&self, event: EventName) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event)
            .map_or(0, Vec::len)
    }

    /// Events that currently have at least one handler
    pub fn event_names(&self) -> Vec<EventName> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }

    /// Fire-and-forget fan-out
    ///
    /// Handlers are started in registration order on a detached task and are
    /// not awaited by the caller. Returns whether at least one handler was
    /// registered. Must be called from within a Tokio runtime.
    pub fn publish(&self, event: DomainEvent) -> bool {
        let name = event.name();
        let handlers = self.snapshot(name);
        if handlers.is_empty() {
            debug!(event = %name, "Published event but no subscribers");
            return false;
        }

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!(event = %name, error = %e, "No async runtime, event dropped");
                return true;
            }
        };

        debug!(event = %name, subscribers = handlers.len(), "Publishing event");
        let event = Arc::new(event);
        runtime.spawn(async move {
            let deliveries: Vec<_> = handlers
                .into_iter()
                .map(|handler| {
                    let event = Arc::clone(&event);
                    async move { deliver(handler.as_ref(), &event).await }
                })
                .collect();
            join_all(deliveries).await;
        });
        true
    }

    /// Sequential fan-out
    ///
    /// Each handler is awaited before the next one is invoked, so handler N's
    /// cache effects are visible to handler N+1 and to the caller afterwards.
    pub async fn publish_and_wait(&self, event: DomainEvent) -> DispatchSummary {
        let name = event.name();
        let handlers = self.snapshot(name);
        let mut summary = DispatchSummary::default();

        for handler in &handlers {
            summary.delivered += 1;
            if !deliver(handler.as_ref(), &event).await {
                summary.failed += 1;
            }
        }

        debug!(
            event = %name,
            delivered = summary.delivered,
            failed = summary.failed,
            "Event dispatched"
        );
        summary
    }

    fn snapshot(&self, event: EventName) -> Vec<SharedEventHandler> {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&event)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InProcessEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for InProcessEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
        let counts: BTreeMap<&str, usize> = registry
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        f.debug_struct("InProcessEventBus")
            .field("listeners", &counts)
            .field("max_listeners", &self.max_listeners)
            .finish()
    }
}

#[async_trait]
impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: DomainEvent) -> bool {
        InProcessEventBus::publish(self, event)
    }

    async fn publish_and_wait(&self, event: DomainEvent) -> DispatchSummary {
        InProcessEventBus::publish_and_wait(self, event).await
    }
}

/// Identity comparison of handler registrations
fn same_handler(a: &SharedEventHandler, b: &SharedEventHandler) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Run one handler, containing errors and panics. Returns true on success.
async fn deliver(handler: &dyn EventHandler, event: &DomainEvent) -> bool {
    match AssertUnwindSafe(handler.handle(event)).catch_unwind().await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!(
                event = %event.name(),
                handler = handler.name(),
                error = %e,
                "Error in event handler"
            );
            false
        }
        Err(_) => {
            error!(
                event = %event.name(),
                handler = handler.name(),
                "Event handler panicked"
            );
            false
        }
    }
}
