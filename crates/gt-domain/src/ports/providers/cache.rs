//! Cache Provider Port
//!
//! Port for cache backend providers. Supports a distributed backend (Redis),
//! an in-memory backend (Moka) and a null provider that never stores.
//!
//! Providers work on *physical* keys and report every failure through
//! [`Result`]. Namespacing and the soft-fail policy (log and treat as a miss)
//! are applied one layer up, by the infrastructure cache store.

use crate::constants::DEFAULT_CACHE_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Configures how a cache entry should be stored.
///
/// # Example
///
/// ```
/// use gt_domain::ports::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::default().with_ttl_secs(600);
/// assert_eq!(config.effective_ttl(), Duration::from_secs(600));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntryConfig {
    /// Time to live for the cache entry
    pub ttl: Option<Duration>,
}

impl CacheEntryConfig {
    /// Create a new cache entry config with default TTL
    pub fn new() -> Self {
        Self {
            ttl: Some(Duration::from_secs(DEFAULT_CACHE_TTL_SECS)),
        }
    }

    /// Set the TTL for the cache entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Get the effective TTL, falling back to default
    ///
    /// A zero TTL also falls back: every entry expires eventually.
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .filter(|ttl| !ttl.is_zero())
            .unwrap_or(Duration::from_secs(DEFAULT_CACHE_TTL_SECS))
    }
}

impl Default for CacheEntryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache diagnostic record
///
/// Opaque observability data; never used for correctness decisions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Provider that produced the record
    pub provider: String,
    /// Number of cache hits observed by this process
    pub hits: u64,
    /// Number of cache misses observed by this process
    pub misses: u64,
    /// Number of entries in the backing store, when known
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
    /// Raw backend statistics (e.g. Redis `INFO stats`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_info: Option<String>,
}

impl CacheStats {
    /// Create empty cache statistics for a provider
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Self::default()
        }
    }

    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// Defines the contract for cache backends. Values are JSON strings; expiry is
/// enforced by the backend itself, so a provider must never return an entry
/// whose TTL has elapsed.
///
/// # Implementations
///
/// - **Redis**: Distributed cache shared by every service instance
/// - **Moka**: In-memory cache with per-entry TTL
/// - **Null**: Always-miss provider for disabled caching and tests
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value as JSON string, `None` if absent or expired
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Store a JSON string with the entry's TTL
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a key
    ///
    /// # Returns
    /// True if the key was deleted, false if it didn't exist
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Delete a batch of keys, returning how many existed
    async fn delete_many(&self, keys: &[String]) -> Result<u64>;

    /// Enumerate keys matching a glob pattern (`*`, `?`, `[...]`)
    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>>;

    /// Check if a key exists and hasn't expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Atomically add `amount` to an integer counter, creating it at 0
    async fn increment(&self, key: &str, amount: i64) -> Result<i64>;

    /// Reset the TTL of an existing key without rewriting its value
    ///
    /// # Returns
    /// False when the key does not exist
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Liveness probe; healthy backends answer `PONG`
    async fn ping(&self) -> Result<String>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "moka", "redis", "null")
    fn provider_name(&self) -> &str;
}
