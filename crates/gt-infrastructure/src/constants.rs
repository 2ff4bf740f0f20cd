//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "goals-tasks.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration (`GT__CACHE__PROVIDER=redis`)
pub const CONFIG_ENV_PREFIX: &str = "GT";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional environment variable holding the Redis connection string
pub const REDIS_URL_ENV: &str = "REDIS_URL";

// ============================================================================
// CACHE CONSTANTS
// ============================================================================

/// Redis connection string used when none is configured
pub const DEFAULT_REDIS_URL: &str = "redis://localhost:6379";

/// Default maximum number of entries for the in-memory provider
pub const CACHE_DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// Characters that would be interpreted as glob syntax inside a namespace
pub const CACHE_NAMESPACE_FORBIDDEN_CHARS: &[char] = &['*', '?', '[', ']', '\\', ' '];

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "GT_LOG";
