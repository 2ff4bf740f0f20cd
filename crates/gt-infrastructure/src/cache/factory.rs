//! Cache provider factory
//!
//! Turns [`CacheConfig`] into a concrete backing provider.

use crate::config::{CacheConfig, CacheProviderKind};
use gt_domain::error::Result;
use gt_domain::ports::CacheProvider;
use gt_providers::cache::{MokaCacheProvider, NullCacheProvider, RedisCacheProvider};
use std::sync::Arc;
use tracing::info;

/// Create the backing provider selected by `config`
///
/// A disabled cache gets the null provider. Building a Redis provider does
/// not connect; an unreachable server surfaces later as per-operation
/// errors, which the store soft-fails.
pub fn create_cache_provider(config: &CacheConfig) -> Result<Arc<dyn CacheProvider>> {
    if !config.enabled {
        info!("Cache disabled, using null provider");
        return Ok(Arc::new(NullCacheProvider::new()));
    }

    let provider: Arc<dyn CacheProvider> = match config.provider {
        CacheProviderKind::Moka => Arc::new(MokaCacheProvider::with_capacity(config.max_entries)),
        CacheProviderKind::Redis => {
            let provider = RedisCacheProvider::new(&config.effective_redis_url())?;
            info!(server = provider.server_address(), "Using Redis cache provider");
            Arc::new(provider)
        }
        CacheProviderKind::Null => Arc::new(NullCacheProvider::new()),
    };

    Ok(provider)
}
