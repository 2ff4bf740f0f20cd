//! Moka Cache Provider Tests

use gt_providers::cache::{CacheEntryConfig, MokaCacheProvider};
use gt_providers::CacheProvider;
use std::time::Duration;

fn short_ttl() -> CacheEntryConfig {
    CacheEntryConfig::default().with_ttl_secs(1)
}

#[tokio::test]
async fn test_set_then_get_returns_value() {
    let provider = MokaCacheProvider::new();

    provider
        .set_json("goal:g1", r#"{"id":"g1"}"#, CacheEntryConfig::default())
        .await
        .unwrap();

    assert_eq!(
        provider.get_json("goal:g1").await.unwrap().as_deref(),
        Some(r#"{"id":"g1"}"#)
    );
    assert!(provider.exists("goal:g1").await.unwrap());
}

#[tokio::test]
async fn test_entry_expires_after_ttl() {
    let provider = MokaCacheProvider::new();
    provider.set_json("k", "1", short_ttl()).await.unwrap();

    assert!(provider.get_json("k").await.unwrap().is_some());
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(provider.get_json("k").await.unwrap(), None);
    assert!(!provider.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_delete_reports_presence() {
    let provider = MokaCacheProvider::new();
    provider
        .set_json("k", "1", CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(provider.delete("k").await.unwrap());
    assert!(!provider.delete("k").await.unwrap());
    assert!(!provider.delete("never-set").await.unwrap());
}

#[tokio::test]
async fn test_concurrent_deletes_report_presence_once() {
    let provider = MokaCacheProvider::new();
    for round in 0..50 {
        let key = format!("k{round}");
        provider
            .set_json(&key, "1", CacheEntryConfig::default())
            .await
            .unwrap();

        let (a, b) = tokio::join!(provider.delete(&key), provider.delete(&key));
        assert!(a.unwrap() ^ b.unwrap());
    }
}

#[tokio::test]
async fn test_sub_second_ttl_expires() {
    let provider = MokaCacheProvider::new();
    let config = CacheEntryConfig::default().with_ttl(Duration::from_millis(500));
    provider.set_json("k", "1", config).await.unwrap();

    assert!(provider.exists("k").await.unwrap());
    tokio::time::sleep(Duration::from_millis(700)).await;
    assert_eq!(provider.get_json("k").await.unwrap(), None);
}

#[tokio::test]
async fn test_zero_ttl_is_not_permanent() {
    let provider = MokaCacheProvider::new();
    let config = CacheEntryConfig::default().with_ttl(Duration::ZERO);
    provider.set_json("k", "1", config).await.unwrap();

    // Stored with the default TTL rather than expiring at once
    assert_eq!(provider.get_json("k").await.unwrap().as_deref(), Some("1"));
}

#[tokio::test]
async fn test_keys_matching_uses_glob_semantics() {
    let provider = MokaCacheProvider::new();
    for key in ["ns:goal:1", "ns:goal:2", "ns:goals:user:u1", "ns:task:1", "other:goal:1"] {
        provider
            .set_json(key, "1", CacheEntryConfig::default())
            .await
            .unwrap();
    }

    let mut keys = provider.keys_matching("ns:goal:*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["ns:goal:1", "ns:goal:2"]);

    let single = provider.keys_matching("ns:task:?").await.unwrap();
    assert_eq!(single, vec!["ns:task:1"]);
}

#[tokio::test]
async fn test_invalid_pattern_is_an_error() {
    let provider = MokaCacheProvider::new();
    assert!(provider.keys_matching("ns:[").await.is_err());
}

#[tokio::test]
async fn test_delete_many_counts_existing_keys() {
    let provider = MokaCacheProvider::new();
    provider
        .set_json("a", "1", CacheEntryConfig::default())
        .await
        .unwrap();
    provider
        .set_json("b", "1", CacheEntryConfig::default())
        .await
        .unwrap();

    let deleted = provider
        .delete_many(&["a".to_string(), "b".to_string(), "c".to_string()])
        .await
        .unwrap();

    assert_eq!(deleted, 2);
    assert!(!provider.exists("a").await.unwrap());
}

#[tokio::test]
async fn test_increment_creates_and_adds() {
    let provider = MokaCacheProvider::new();

    assert_eq!(provider.increment("views", 1).await.unwrap(), 1);
    assert_eq!(provider.increment("views", 5).await.unwrap(), 6);
    assert_eq!(provider.increment("views", -6).await.unwrap(), 0);
    assert_eq!(provider.get_json("views").await.unwrap().as_deref(), Some("0"));
}

#[tokio::test]
async fn test_increment_rejects_non_integer_value() {
    let provider = MokaCacheProvider::new();
    provider
        .set_json("goal:g1", r#"{"id":"g1"}"#, CacheEntryConfig::default())
        .await
        .unwrap();

    assert!(provider.increment("goal:g1", 1).await.is_err());
    // The stored value is untouched
    assert_eq!(
        provider.get_json("goal:g1").await.unwrap().as_deref(),
        Some(r#"{"id":"g1"}"#)
    );
}

#[tokio::test]
async fn test_increment_keeps_existing_ttl() {
    let provider = MokaCacheProvider::new();
    provider.set_json("counter", "1", short_ttl()).await.unwrap();

    assert_eq!(provider.increment("counter", 1).await.unwrap(), 2);
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert!(!provider.exists("counter").await.unwrap());
}

#[tokio::test]
async fn test_expire_refreshes_ttl_without_rewriting() {
    let provider = MokaCacheProvider::new();
    provider.set_json("k", "value", short_ttl()).await.unwrap();

    assert!(provider.expire("k", Duration::from_secs(60)).await.unwrap());
    tokio::time::sleep(Duration::from_millis(1100)).await;

    assert_eq!(provider.get_json("k").await.unwrap().as_deref(), Some("value"));
}

#[tokio::test]
async fn test_expire_missing_key_returns_false() {
    let provider = MokaCacheProvider::new();
    assert!(!provider.expire("missing", Duration::from_secs(5)).await.unwrap());
    assert!(!provider.exists("missing").await.unwrap());
}

#[tokio::test]
async fn test_stats_track_hits_and_misses() {
    let provider = MokaCacheProvider::new();
    provider
        .set_json("k", "1", CacheEntryConfig::default())
        .await
        .unwrap();
    let _ = provider.get_json("k").await.unwrap();
    let _ = provider.get_json("missing").await.unwrap();

    let stats = provider.stats().await.unwrap();
    assert_eq!(stats.provider, "moka");
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
    assert_eq!(provider.ping().await.unwrap(), "PONG");
}
