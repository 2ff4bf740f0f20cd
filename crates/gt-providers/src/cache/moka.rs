//! Moka in-memory cache provider
//!
//! High-performance, concurrent in-memory cache implementation using Moka.
//!
//! ## Features
//!
//! - Per-entry TTL through a custom [`Expiry`] policy
//! - Atomic read-modify-write for counters and TTL refresh
//! - Glob key enumeration compatible with Redis `KEYS`/`SCAN MATCH`
//!
//! ## Example
//!
//! ```ignore
//! use gt_providers::cache::MokaCacheProvider;
//!
//! let provider = MokaCacheProvider::with_capacity(10_000);
//! ```

use super::counters::HitCounters;
use async_trait::async_trait;
use globset::{GlobBuilder, GlobMatcher};
use gt_domain::error::{Error, Result};
use gt_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};
use moka::Expiry;
use moka::future::Cache;
use moka::ops::compute::Op;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default maximum number of entries
pub const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// How a write affects the entry's expiry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TtlPolicy {
    /// Expire this long after the write
    ExpireIn(Duration),
    /// Keep whatever expiry the entry already had
    Keep,
}

#[derive(Debug, Clone)]
struct CachedValue {
    json: String,
    ttl: TtlPolicy,
}

/// Per-entry expiry driven by the [`TtlPolicy`] stored with each value
struct EntryExpiry;

impl Expiry<String, CachedValue> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedValue,
        _created_at: Instant,
    ) -> Option<Duration> {
        match value.ttl {
            TtlPolicy::ExpireIn(ttl) => Some(ttl),
            TtlPolicy::Keep => None,
        }
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        _updated_at: Instant,
        duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        match value.ttl {
            TtlPolicy::ExpireIn(ttl) => Some(ttl),
            TtlPolicy::Keep => duration_until_expiry,
        }
    }
}

/// Moka-based in-memory cache provider
///
/// Suitable for a single service instance. Entries honor the TTL given at
/// write time; expired entries are never returned.
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, CachedValue>,
    max_entries: u64,
    counters: Arc<HitCounters>,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider with default settings
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    /// Create a new Moka cache provider holding at most `max_entries`
    pub fn with_capacity(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(EntryExpiry)
            .build();

        Self {
            cache,
            max_entries,
            counters: Arc::new(HitCounters::default()),
        }
    }

    /// Get the maximum capacity of the cache
    pub fn max_entries(&self) -> u64 {
        self.max_entries
    }

    fn compile_pattern(pattern: &str) -> Result<GlobMatcher> {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(false)
            .backslash_escape(true)
            .build()
            .map_err(|e| Error::invalid_argument(format!("Invalid key pattern '{pattern}': {e}")))?;
        Ok(glob.compile_matcher())
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        match self.cache.get(key).await {
            Some(value) => {
                self.counters.record_hit();
                Ok(Some(value.json))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        self.cache
            .insert(
                key.to_string(),
                CachedValue {
                    json: value.to_string(),
                    ttl: TtlPolicy::ExpireIn(config.effective_ttl()),
                },
            )
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64> {
        let mut deleted = 0;
        for key in keys {
            if self.delete(key).await? {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = Self::compile_pattern(pattern)?;
        let keys = self
            .cache
            .iter()
            .filter(|(key, _)| matcher.is_match(key.as_str()))
            .map(|(key, _)| key.as_ref().clone())
            .collect();
        Ok(keys)
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn increment(&self, key: &str, amount: i64) -> Result<i64> {
        let mut outcome: Result<i64> = Err(Error::cache("increment did not run"));

        let _ = self
            .cache
            .entry(key.to_string())
            .and_compute_with(|existing| {
                let current = match existing {
                    Some(entry) => entry.into_value().json.trim().parse::<i64>().map_err(|_| {
                        Error::cache(format!("Value at '{key}' is not an integer"))
                    }),
                    None => Ok(0),
                };
                let next = current.and_then(|current| {
                    current
                        .checked_add(amount)
                        .ok_or_else(|| Error::cache(format!("Increment of '{key}' overflows")))
                });
                let op = match &next {
                    Ok(value) => Op::Put(CachedValue {
                        json: value.to_string(),
                        ttl: TtlPolicy::Keep,
                    }),
                    Err(_) => Op::Nop,
                };
                outcome = next;
                std::future::ready(op)
            })
            .await;

        outcome
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let mut found = false;

        let _ = self
            .cache
            .entry(key.to_string())
            .and_compute_with(|existing| {
                let op = match existing {
                    Some(entry) => {
                        found = true;
                        Op::Put(CachedValue {
                            json: entry.into_value().json,
                            ttl: TtlPolicy::ExpireIn(ttl),
                        })
                    }
                    None => Op::Nop,
                };
                std::future::ready(op)
            })
            .await;

        Ok(found)
    }

    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }

    async fn stats(&self) -> Result<CacheStats> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;

        let mut stats = self.counters.snapshot(self.provider_name());
        stats.entries = self.cache.entry_count();
        Ok(stats)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("max_entries", &self.max_entries)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
