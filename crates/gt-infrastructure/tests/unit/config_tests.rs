//! Configuration loading tests

use gt_domain::error::Error;
use gt_infrastructure::config::{AppConfig, CacheProviderKind, ConfigLoader};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn load(contents: &str) -> gt_domain::error::Result<AppConfig> {
    let file = write_config(contents);
    ConfigLoader::new().with_config_path(file.path()).load()
}

#[test]
fn test_defaults_when_file_is_missing() {
    let dir = TempDir::new().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();

    assert!(config.cache.enabled);
    assert_eq!(config.cache.provider, CacheProviderKind::Moka);
    assert_eq!(config.cache.namespace, "goals-tasks");
    assert_eq!(config.cache.default_ttl_secs, 3600);
    assert_eq!(config.cache.refresh_ttl_secs, 3600);
    assert_eq!(config.event_bus.max_listeners, 100);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_file_overrides_defaults() {
    let config = load(
        r#"
        [cache]
        provider = "redis"
        redis_url = "redis://cache.internal:6380"
        namespace = "gt-staging"
        default_ttl_secs = 600

        [event_bus]
        max_listeners = 20

        [logging]
        level = "debug"
        json_format = true
        "#,
    )
    .unwrap();

    assert_eq!(config.cache.provider, CacheProviderKind::Redis);
    assert_eq!(
        config.cache.effective_redis_url(),
        "redis://cache.internal:6380"
    );
    assert_eq!(config.cache.namespace, "gt-staging");
    assert_eq!(config.cache.default_ttl_secs, 600);
    // Untouched keys keep their defaults
    assert_eq!(config.cache.refresh_ttl_secs, 3600);
    assert_eq!(config.event_bus.max_listeners, 20);
    assert!(config.logging.json_format);
}

#[test]
fn test_zero_ttl_is_rejected() {
    let err = load("[cache]\ndefault_ttl_secs = 0\n").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_ttl_is_accepted_when_cache_disabled() {
    let config = load("[cache]\nenabled = false\ndefault_ttl_secs = 0\n").unwrap();
    assert!(!config.cache.enabled);
}

#[test]
fn test_glob_characters_in_namespace_are_rejected() {
    assert!(load("[cache]\nnamespace = \"goals*\"\n").is_err());
    assert!(load("[cache]\nnamespace = \"\"\n").is_err());
}

#[test]
fn test_redis_provider_requires_redis_scheme() {
    let err = load("[cache]\nprovider = \"redis\"\nredis_url = \"http://localhost\"\n").unwrap_err();
    assert!(err.to_string().contains("redis://"));
}

#[test]
fn test_zero_listener_cap_is_rejected() {
    assert!(load("[event_bus]\nmax_listeners = 0\n").is_err());
}

#[test]
fn test_unknown_log_level_is_rejected() {
    assert!(load("[logging]\nlevel = \"chatty\"\n").is_err());
}

#[test]
fn test_malformed_file_is_a_configuration_error() {
    let err = load("[cache\nprovider = ").unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("goals-tasks.toml");

    let mut config = AppConfig::default();
    config.cache.provider = CacheProviderKind::Null;
    config.cache.namespace = "gt-test".to_string();

    let loader = ConfigLoader::new().with_config_path(&path);
    loader.save_to_file(&config, &path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loader.config_path(), Some(path.as_path()));
    assert_eq!(loaded.cache.provider, CacheProviderKind::Null);
    assert_eq!(loaded.cache.namespace, "gt-test");
}
