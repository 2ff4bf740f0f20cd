//! Event bus configuration types

use gt_domain::constants::DEFAULT_MAX_LISTENERS;
use serde::{Deserialize, Serialize};

/// Event bus configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBusConfig {
    /// Listeners per event beyond which a leak warning is logged.
    /// Registration is never rejected.
    pub max_listeners: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}
