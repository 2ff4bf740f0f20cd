//! # Goals/Tasks - Provider Implementations
//!
//! Adapters implementing the ports defined in `gt-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Cache | `CacheProvider` | Redis, Moka, Null |
//! | Events | `EventPublisher` | InProcess |
//! | Notification | `NotificationSender` | Logging |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! gt-providers = { version = "0.1", default-features = false, features = ["cache-moka"] }
//! ```

pub use gt_domain::error::{Error, Result};
pub use gt_domain::ports::{CacheProvider, EventPublisher, NotificationSender};

/// Cache provider implementations
///
/// Implements `CacheProvider` trait for caching backends.
pub mod cache;

/// Event bus implementations
///
/// Implements `EventPublisher` with an ordered subscriber registry.
pub mod events;

/// Notification sender implementations
pub mod notification;
