//! Domain Events
//!
//! Domain events are immutable facts published after a goal or task mutation
//! has been committed. Consumers (cache invalidation, notifications) react to
//! them through the event bus.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`DomainEvent`] | Closed sum type, one variant per event |
//! | [`EventName`] | Payload-free identifier used as the registry key |

/// Domain event definitions
pub mod domain_events;

pub use domain_events::{DomainEvent, EventName};
