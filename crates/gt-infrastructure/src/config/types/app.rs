//! Main application configuration

use super::{CacheConfig, EventBusConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration of the cache-consistency layer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Cache store and backing provider
    pub cache: CacheConfig,

    /// Event bus settings
    pub event_bus: EventBusConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
