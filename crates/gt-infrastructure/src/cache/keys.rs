//! Cache key utilities
//!
//! Logical keys used by the invalidation handlers and read paths, plus the
//! namespacing rules applied by [`CacheStore`](super::CacheStore).

use gt_domain::constants::CACHE_NAMESPACE_SEPARATOR;
use gt_domain::error::{Error, Result};

/// Cache key utilities
pub struct CacheKey;

// Logical keys of cached read-models
impl CacheKey {
    /// Single goal: `goal:{goal_id}`
    pub fn goal(goal_id: &str) -> String {
        format!("goal:{}", goal_id)
    }

    /// Goal list of a user: `goals:user:{user_id}`
    pub fn goals_for_user(user_id: &str) -> String {
        format!("goals:user:{}", user_id)
    }

    /// Single task: `task:{task_id}`
    pub fn task(task_id: &str) -> String {
        format!("task:{}", task_id)
    }

    /// Task list of a goal: `tasks:goal:{goal_id}`
    pub fn tasks_for_goal(goal_id: &str) -> String {
        format!("tasks:goal:{}", goal_id)
    }
}

// Namespacing
impl CacheKey {
    /// Create a namespaced cache key
    pub fn namespaced(namespace: &str, key: &str) -> String {
        format!("{}{}{}", namespace, CACHE_NAMESPACE_SEPARATOR, key)
    }

    /// Strip `namespace` from a physical key, `None` if it belongs elsewhere
    pub fn strip_namespace<'a>(namespace: &str, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(namespace)?
            .strip_prefix(CACHE_NAMESPACE_SEPARATOR)
    }

    /// Reject empty keys and keys holding control characters
    pub fn validate_key(key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(Error::invalid_argument("Cache key cannot be empty"));
        }

        if key.chars().any(char::is_control) {
            return Err(Error::invalid_argument(
                "Cache key contains invalid characters",
            ));
        }

        Ok(())
    }
}
