//! Port traits
//!
//! Contracts implemented by adapters in `gt-providers` and consumed by the
//! wiring in `gt-infrastructure`.
//!
//! | Port | Category | Description |
//! |------|----------|-------------|
//! | [`CacheProvider`] | providers | Backing key/value store with TTL |
//! | [`NotificationSender`] | providers | Best-effort user notifications |
//! | [`EventHandler`] | infrastructure | Subscriber callback on the event bus |
//! | [`EventPublisher`] | infrastructure | Publishing side of the event bus |

/// Infrastructure ports (event bus)
pub mod infrastructure;
/// Provider ports (cache, notification)
pub mod providers;

pub use infrastructure::{DispatchSummary, EventHandler, EventPublisher, SharedEventHandler};
pub use providers::{
    CacheEntryConfig, CacheProvider, CacheStats, Notification, NotificationSender,
};
