//! Cache Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Disabled | Always-miss stub |
//! | [`MokaCacheProvider`] | Local | In-memory cache with per-entry TTL |
//! | [`RedisCacheProvider`] | Distributed | Redis-backed, shared by all instances |
//!
//! ## Provider Selection Guide
//!
//! - **Caching disabled / unit tests of callers**: `NullCacheProvider`
//! - **Single instance / development**: `MokaCacheProvider`
//! - **Multi instance**: `RedisCacheProvider`

#[cfg(any(feature = "cache-moka", feature = "cache-redis"))]
mod counters;
#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;
#[cfg(feature = "cache-redis")]
pub mod redis;

#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
#[cfg(feature = "cache-redis")]
pub use redis::RedisCacheProvider;

pub use gt_domain::ports::{CacheEntryConfig, CacheStats};
