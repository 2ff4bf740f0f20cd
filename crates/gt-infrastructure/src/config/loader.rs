//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::{AppConfig, CacheProviderKind};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use gt_domain::error::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if it exists)
    /// 3. Environment variables with prefix (e.g., `GT__CACHE__PROVIDER=redis`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(config_path) => {
                if config_path.exists() {
                    figment = figment.merge(Toml::file(config_path));
                    log_config_loaded(config_path, true);
                } else {
                    log_config_loaded(config_path, false);
                }
            }
            None => {
                if let Some(default_path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Double underscore separates nesting levels so that snake_case
        // field names survive (GT__CACHE__DEFAULT_TTL_SECS)
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];

        candidates.into_iter().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Runs every section check and returns the first failure.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_cache_config(config)?;
    validate_event_bus_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_cache_config(config: &AppConfig) -> Result<()> {
    let cache = &config.cache;

    if cache.namespace.is_empty() {
        return Err(Error::configuration("Cache namespace cannot be empty"));
    }
    if cache.namespace.contains(CACHE_NAMESPACE_FORBIDDEN_CHARS) {
        return Err(Error::configuration(format!(
            "Cache namespace '{}' contains glob or whitespace characters",
            cache.namespace
        )));
    }
    if cache.enabled && cache.default_ttl_secs == 0 {
        return Err(Error::configuration(
            "Cache TTL cannot be 0 when cache is enabled",
        ));
    }
    if cache.enabled && cache.refresh_ttl_secs == 0 {
        return Err(Error::configuration(
            "Cache refresh TTL cannot be 0 when cache is enabled",
        ));
    }
    if cache.enabled && cache.provider == CacheProviderKind::Moka && cache.max_entries == 0 {
        return Err(Error::configuration(
            "Cache max entries cannot be 0 for the moka provider",
        ));
    }
    if cache.enabled && cache.provider == CacheProviderKind::Redis {
        let url = cache.effective_redis_url();
        if !(url.starts_with("redis://") || url.starts_with("rediss://")) {
            return Err(Error::configuration(
                "Redis URL must start with redis:// or rediss://",
            ));
        }
    }
    Ok(())
}

fn validate_event_bus_config(config: &AppConfig) -> Result<()> {
    if config.event_bus.max_listeners == 0 {
        return Err(Error::configuration(
            "Event bus max listeners cannot be 0",
        ));
    }
    Ok(())
}

fn validate_logging_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}
