//! Provider ports

/// Cache backend port
pub mod cache;
/// Notification delivery port
pub mod notification;

pub use cache::{CacheEntryConfig, CacheProvider, CacheStats};
pub use notification::{Notification, NotificationSender};
