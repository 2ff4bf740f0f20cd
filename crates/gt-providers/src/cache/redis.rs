//! Redis distributed cache provider
//!
//! Distributed cache implementation using Redis as the backend.
//! Suitable for multi-instance deployments.
//!
//! ## Features
//!
//! - Millisecond TTLs enforced by Redis (`SET ... PX`, `PEXPIRE`)
//! - Cursor based key enumeration (`SCAN MATCH`), batch `DEL`
//! - Atomic counters (`INCRBY`)
//! - Lazy connections: creating the provider never touches the network, so an
//!   unreachable server shows up as per-operation errors instead of a startup
//!   failure
//!
//! ## Example
//!
//! ```ignore
//! use gt_providers::cache::RedisCacheProvider;
//!
//! let provider = RedisCacheProvider::new("redis://localhost:6379")?;
//! // Or with host/port
//! let provider = RedisCacheProvider::with_host_port("localhost", 6379)?;
//! ```

use super::counters::HitCounters;
use async_trait::async_trait;
use gt_domain::error::{Error, Result};
use gt_domain::ports::{CacheEntryConfig, CacheProvider, CacheStats};
use redis::{Client, FromRedisValue, aio::MultiplexedConnection};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

/// Keys requested per `SCAN` round trip
const SCAN_BATCH_SIZE: usize = 500;

/// Millisecond TTL argument; Redis rejects `PX 0`
fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

/// Redis cache provider
///
/// Distributed cache implementation using Redis.
/// Uses multiplexed connections for efficient connection reuse.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
    address: String,
    counters: Arc<HitCounters>,
}

impl RedisCacheProvider {
    /// Create a new Redis cache provider with connection string
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub fn new(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| Error::Infrastructure {
            message: format!("Failed to create Redis client: {}", e),
            source: Some(Box::new(e)),
        })?;

        // Credentials never reach logs or Debug output
        let address = connection_string
            .rsplit_once('@')
            .map_or(connection_string, |(_, host)| host)
            .trim_start_matches("redis://")
            .trim_start_matches("rediss://")
            .to_string();

        Ok(Self {
            client,
            address,
            counters: Arc::new(HitCounters::default()),
        })
    }

    /// Create a new Redis cache provider with host and port
    pub fn with_host_port(host: &str, port: u16) -> Result<Self> {
        Self::new(&format!("redis://{}:{}", host, port))
    }

    /// Get a connection from the pool
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::Infrastructure {
                message: format!("Failed to get Redis connection: {}", e),
                source: Some(Box::new(e)),
            })
    }

    /// Run one command on a fresh multiplexed handle
    async fn query<T: FromRedisValue>(&self, cmd: &redis::Cmd, op: &str) -> Result<T> {
        let mut conn = self.get_connection().await?;
        cmd.query_async(&mut conn)
            .await
            .map_err(|e| Error::Infrastructure {
                message: format!("Redis {} failed: {}", op, e),
                source: Some(Box::new(e)),
            })
    }

    /// Get the Redis server address description
    pub fn server_address(&self) -> &str {
        &self.address
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = self.query(redis::cmd("GET").arg(key), "GET").await?;
        match value {
            Some(value) => {
                self.counters.record_hit();
                Ok(Some(value))
            }
            None => {
                self.counters.record_miss();
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let ttl = ttl_millis(config.effective_ttl());
        self.query::<()>(
            redis::cmd("SET").arg(key).arg(value).arg("PX").arg(ttl),
            "SET",
        )
        .await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let deleted: i64 = self.query(redis::cmd("DEL").arg(key), "DEL").await?;
        Ok(deleted > 0)
    }

    async fn delete_many(&self, keys: &[String]) -> Result<u64> {
        if keys.is_empty() {
            return Ok(0);
        }
        let deleted: u64 = self.query(redis::cmd("DEL").arg(keys), "DEL").await?;
        Ok(deleted)
    }

    async fn keys_matching(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.get_connection().await?;
        // SCAN may report a key more than once
        let mut keys = BTreeSet::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH_SIZE)
                .query_async(&mut conn)
                .await
                .map_err(|e| Error::Infrastructure {
                    message: format!("Redis SCAN failed: {}", e),
                    source: Some(Box::new(e)),
                })?;

            keys.extend(batch);
            if next == 0 {
                break;
            }
            cursor = next;
        }

        Ok(keys.into_iter().collect())
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        let count: i64 = self.query(redis::cmd("EXISTS").arg(key), "EXISTS").await?;
        Ok(count > 0)
    }

    async fn increment(&self, key: &str, amount: i64) -> Result<i64> {
        self.query(redis::cmd("INCRBY").arg(key).arg(amount), "INCRBY")
            .await
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let updated: i64 = self
            .query(
                redis::cmd("PEXPIRE").arg(key).arg(ttl_millis(ttl)),
                "PEXPIRE",
            )
            .await?;
        Ok(updated == 1)
    }

    async fn ping(&self) -> Result<String> {
        self.query(&redis::cmd("PING"), "PING").await
    }

    async fn stats(&self) -> Result<CacheStats> {
        let dbsize: u64 = self.query(&redis::cmd("DBSIZE"), "DBSIZE").await?;
        let info: String = self
            .query(redis::cmd("INFO").arg("stats"), "INFO")
            .await?;

        let mut stats = self.counters.snapshot(self.provider_name());
        stats.entries = dbsize;
        stats.backend_info = Some(info);
        Ok(stats)
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider")
            .field("server", &self.server_address())
            .finish()
    }
}
