//! Configuration types module

pub mod app;
pub mod cache;
pub mod event_bus;
pub mod logging;

// Re-export main types
pub use app::AppConfig;
pub use cache::{CacheConfig, CacheProviderKind};
pub use event_bus::EventBusConfig;
pub use logging::LoggingConfig;
