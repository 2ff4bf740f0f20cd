//! Null cache provider
//!
//! A cache provider implementation that doesn't store anything. Used when
//! caching is disabled in configuration.

use async_trait::async_trait;
use gt_domain::error::Result;
use gt_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};
use std::time::Duration;

/// Null cache provider that doesn't store anything
///
/// Every read is a miss and every write is accepted and dropped, so callers
/// always fall through to the system of record.
///
/// # Example
///
/// ```rust
/// use gt_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn delete_many(&self, _keys: &[String]) -> Result<u64> {
        Ok(0)
    }

    async fn keys_matching(&self, _pattern: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn increment(&self, _key: &str, amount: i64) -> Result<i64> {
        // Nothing persists, so every counter starts from zero
        Ok(amount)
    }

    async fn expire(&self, _key: &str, _ttl: Duration) -> Result<bool> {
        Ok(false)
    }

    async fn ping(&self) -> Result<String> {
        Ok("PONG".to_string())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new("null"))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
