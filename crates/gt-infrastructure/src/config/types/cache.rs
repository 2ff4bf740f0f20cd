//! Cache configuration types

use crate::constants::{CACHE_DEFAULT_MAX_ENTRIES, DEFAULT_REDIS_URL, REDIS_URL_ENV};
use gt_domain::constants::{
    DEFAULT_CACHE_NAMESPACE, DEFAULT_CACHE_TTL_SECS, ENTITY_REFRESH_TTL_SECS,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache backing providers
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheProviderKind {
    /// In-process cache (Moka), single instance only
    #[default]
    Moka,
    /// Shared cache (Redis)
    Redis,
    /// No backing store; every read misses
    Null,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled. A disabled cache behaves like the `null` provider.
    pub enabled: bool,

    /// Cache provider
    pub provider: CacheProviderKind,

    /// Redis connection string (for the Redis provider)
    pub redis_url: Option<String>,

    /// Namespace prefixed to every key (`{namespace}:{key}`)
    pub namespace: String,

    /// TTL applied by `set` when the caller gives none
    pub default_ttl_secs: u64,

    /// Capacity of the in-process provider
    pub max_entries: u64,

    /// TTL used when handlers refresh an entity after completion
    pub refresh_ttl_secs: u64,
}

impl CacheConfig {
    /// Redis URL: explicit setting, then `REDIS_URL`, then localhost
    pub fn effective_redis_url(&self) -> String {
        self.redis_url
            .clone()
            .or_else(|| std::env::var(REDIS_URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_REDIS_URL.to_string())
    }

    /// Default TTL as a duration
    pub fn default_ttl(&self) -> Duration {
        Duration::from_secs(self.default_ttl_secs)
    }

    /// Refresh TTL as a duration
    pub fn refresh_ttl(&self) -> Duration {
        Duration::from_secs(self.refresh_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CacheProviderKind::Moka,
            redis_url: None,
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
            default_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_entries: CACHE_DEFAULT_MAX_ENTRIES,
            refresh_ttl_secs: ENTITY_REFRESH_TTL_SECS,
        }
    }
}
