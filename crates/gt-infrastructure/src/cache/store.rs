//! Namespaced cache store
//!
//! The only cache surface the rest of the service talks to. Wraps an
//! `Arc<dyn CacheProvider>` and adds:
//!
//! - **Namespacing**: every key becomes `{namespace}:{key}`; patterns are
//!   expanded the same way, so operations never touch foreign keys.
//! - **Typed values**: JSON (de)serialization at the boundary.
//! - **Soft failure**: backing-store errors are logged and reported as a miss
//!   / `false` / `0`. Only [`CacheStore::increment`] returns the error, so a
//!   failed increment is distinguishable from a legitimate counter value.
//! - **Cache-aside**: [`CacheStore::get_or_set`] and the per-key deduplicating
//!   [`CacheStore::get_or_set_coalesced`].

use super::keys::CacheKey;
use dashmap::DashMap;
use gt_domain::error::Result;
use gt_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Namespaced, soft-failing cache store
///
/// Construct once at startup and share it behind an `Arc`.
pub struct CacheStore {
    provider: Arc<dyn CacheProvider>,
    namespace: String,
    default_ttl: Duration,
    in_flight: DashMap<String, Arc<Mutex<()>>>,
}

// Construction
impl CacheStore {
    /// Create a store over `provider`, prefixing keys with `namespace`
    pub fn new(
        provider: Arc<dyn CacheProvider>,
        namespace: impl Into<String>,
        default_ttl: Duration,
    ) -> Self {
        Self {
            provider,
            namespace: namespace.into(),
            default_ttl,
            in_flight: DashMap::new(),
        }
    }

    /// Namespace prefixed to every key
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// TTL used by `set` when none is given
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Name of the backing provider
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    fn namespaced_key(&self, key: &str) -> String {
        CacheKey::namespaced(&self.namespace, key)
    }

    /// Namespaced key, or the validation error logged once
    fn checked_key(&self, key: &str) -> Result<String> {
        CacheKey::validate_key(key)
            .map(|()| self.namespaced_key(key))
            .inspect_err(|e| warn!(key, error = %e, "Rejected cache key"))
    }
}

// Basic operations
impl CacheStore {
    /// Typed read; `None` on absence, expiry, decode failure or backend error
    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let full_key = self.checked_key(key).ok()?;
        let json = match self.provider.get_json(&full_key).await {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!(key = %full_key, "Cache miss");
                return None;
            }
            Err(e) => {
                warn!(key = %full_key, error = %e, "Cache get failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_str(&json) {
            Ok(value) => {
                debug!(key = %full_key, "Cache hit");
                Some(value)
            }
            Err(e) => {
                warn!(key = %full_key, error = %e, "Cached value could not be decoded, treating as miss");
                None
            }
        }
    }

    /// Typed write with `ttl`; failures are logged
    ///
    /// `None` or a zero `ttl` stores with the store's default TTL.
    pub async fn set<T>(&self, key: &str, value: &T, ttl: Option<Duration>)
    where
        T: Serialize + ?Sized,
    {
        let Ok(full_key) = self.checked_key(key) else {
            return;
        };
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %full_key, error = %e, "Value could not be serialized for cache");
                return;
            }
        };

        let ttl = ttl
            .filter(|ttl| !ttl.is_zero())
            .unwrap_or(self.default_ttl);
        let config = CacheEntryConfig::new().with_ttl(ttl);
        match self.provider.set_json(&full_key, &json, config).await {
            Ok(()) => debug!(key = %full_key, ttl_ms = ttl.as_millis(), "Cache set"),
            Err(e) => warn!(key = %full_key, error = %e, "Cache set failed"),
        }
    }

    /// Remove `key`; true only if it was present
    pub async fn delete(&self, key: &str) -> bool {
        let Ok(full_key) = self.checked_key(key) else {
            return false;
        };
        match self.provider.delete(&full_key).await {
            Ok(deleted) => {
                debug!(key = %full_key, deleted, "Cache delete");
                deleted
            }
            Err(e) => {
                warn!(key = %full_key, error = %e, "Cache delete failed");
                false
            }
        }
    }

    /// Remove every key matching the glob `pattern` within the namespace
    ///
    /// Returns the number of keys removed; 0 on no match or on error.
    pub async fn delete_by_pattern(&self, pattern: &str) -> u64 {
        let full_pattern = self.namespaced_key(pattern);
        let keys = match self.provider.keys_matching(&full_pattern).await {
            Ok(keys) => keys,
            Err(e) => {
                warn!(pattern = %full_pattern, error = %e, "Cache key scan failed");
                return 0;
            }
        };
        if keys.is_empty() {
            return 0;
        }

        match self.provider.delete_many(&keys).await {
            Ok(deleted) => {
                debug!(pattern = %full_pattern, deleted, "Cache pattern delete");
                deleted
            }
            Err(e) => {
                warn!(pattern = %full_pattern, error = %e, "Cache pattern delete failed");
                0
            }
        }
    }

    /// Whether `key` currently holds a live entry; false on error
    pub async fn exists(&self, key: &str) -> bool {
        let Ok(full_key) = self.checked_key(key) else {
            return false;
        };
        self.provider
            .exists(&full_key)
            .await
            .unwrap_or_else(|e| {
                warn!(key = %full_key, error = %e, "Cache exists check failed");
                false
            })
    }

    /// Atomically add `amount` to the integer at `key`
    ///
    /// A missing key counts as 0. Unlike the other operations the failure is
    /// returned, since 0 is a valid counter value.
    pub async fn increment(&self, key: &str, amount: i64) -> Result<i64> {
        let full_key = self.checked_key(key)?;
        self.provider
            .increment(&full_key, amount)
            .await
            .inspect_err(|e| warn!(key = %full_key, error = %e, "Cache increment failed"))
    }

    /// Reset the TTL of an existing entry without rewriting it
    ///
    /// False when the key is absent or on error.
    pub async fn expire(&self, key: &str, ttl: Duration) -> bool {
        let Ok(full_key) = self.checked_key(key) else {
            return false;
        };
        self.provider
            .expire(&full_key, ttl)
            .await
            .unwrap_or_else(|e| {
                warn!(key = %full_key, error = %e, "Cache expire failed");
                false
            })
    }

    /// Remove every key in this store's namespace; returns how many went
    pub async fn clear(&self) -> u64 {
        let cleared = self.delete_by_pattern("*").await;
        debug!(namespace = %self.namespace, cleared, "Cache cleared");
        cleared
    }
}

// Cache-aside
impl CacheStore {
    /// Return the cached value for `key`, or fetch, store and return it
    ///
    /// `fetch` runs only on a miss and its error is returned unchanged.
    /// Concurrent callers on a cold key each run `fetch`; the last write
    /// wins. Use [`get_or_set_coalesced`](Self::get_or_set_coalesced) when
    /// the fetch is expensive.
    pub async fn get_or_set<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> std::result::Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        if let Some(cached) = self.get(key).await {
            return Ok(cached);
        }

        let value = fetch().await?;
        self.set(key, &value, ttl).await;
        Ok(value)
    }

    /// Cache-aside with per-key deduplication inside this process
    ///
    /// Callers racing on the same cold key queue behind one fetch; the rest
    /// re-read the cache once it is stored. A failed fetch releases the next
    /// waiter, which fetches on its own.
    pub async fn get_or_set_coalesced<T, E, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> std::result::Result<T, E>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
    {
        if let Some(cached) = self.get(key).await {
            return Ok(cached);
        }

        let full_key = self.namespaced_key(key);
        let slot = Arc::clone(self.in_flight.entry(full_key.clone()).or_default().value());

        let outcome = {
            let _guard = slot.lock().await;
            match self.get(key).await {
                Some(cached) => Ok(cached),
                None => match fetch().await {
                    Ok(value) => {
                        self.set(key, &value, ttl).await;
                        Ok(value)
                    }
                    Err(e) => Err(e),
                },
            }
        };

        // Map entry plus our clone; anything above means another waiter
        self.in_flight
            .remove_if(&full_key, |_, held| Arc::strong_count(held) <= 2);
        outcome
    }
}

// Diagnostics
impl CacheStore {
    /// Liveness probe: true only when the backend answers `PONG`
    pub async fn health_check(&self) -> bool {
        match self.provider.ping().await {
            Ok(reply) => reply == "PONG",
            Err(e) => {
                warn!(provider = self.provider_name(), error = %e, "Cache health check failed");
                false
            }
        }
    }

    /// Backend statistics; an empty record for the provider on error
    pub async fn get_stats(&self) -> CacheStats {
        self.provider.stats().await.unwrap_or_else(|e| {
            warn!(provider = self.provider_name(), error = %e, "Cache stats unavailable");
            CacheStats::new(self.provider_name())
        })
    }
}

impl fmt::Debug for CacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("provider", &self.provider)
            .field("namespace", &self.namespace)
            .field("default_ttl", &self.default_ttl)
            .finish()
    }
}
