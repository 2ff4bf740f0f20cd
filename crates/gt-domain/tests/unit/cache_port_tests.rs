//! Unit tests for cache port value types

use gt_domain::constants::DEFAULT_CACHE_TTL_SECS;
use gt_domain::ports::{CacheEntryConfig, CacheStats};
use std::time::Duration;

#[test]
fn test_cache_entry_config_defaults_to_one_hour() {
    let config = CacheEntryConfig::default();
    assert_eq!(
        config.effective_ttl(),
        Duration::from_secs(DEFAULT_CACHE_TTL_SECS)
    );
}

#[test]
fn test_cache_entry_config_without_ttl_falls_back() {
    let config = CacheEntryConfig { ttl: None };
    assert_eq!(config.effective_ttl(), Duration::from_secs(3600));
}

#[test]
fn test_cache_entry_config_with_ttl() {
    let config = CacheEntryConfig::new().with_ttl(Duration::from_millis(1500));
    assert_eq!(config.effective_ttl(), Duration::from_millis(1500));
}

#[test]
fn test_cache_entry_config_zero_ttl_falls_back() {
    let config = CacheEntryConfig::new().with_ttl(Duration::ZERO);
    assert_eq!(
        config.effective_ttl(),
        Duration::from_secs(DEFAULT_CACHE_TTL_SECS)
    );
}

#[test]
fn test_hit_rate_calculation() {
    let mut stats = CacheStats::new("moka");
    assert_eq!(stats.calculate_hit_rate(), 0.0);

    stats.hits = 3;
    stats.misses = 1;
    assert!((stats.calculate_hit_rate() - 0.75).abs() < f64::EPSILON);
}
