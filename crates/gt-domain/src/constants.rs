//! Domain layer constants
//!
//! Values that are part of the cache-consistency contract itself. Deployment
//! tunables (connection strings, capacities) live in
//! `gt_infrastructure::constants`.

// ============================================================================
// CACHE CONTRACT CONSTANTS
// ============================================================================

/// Default TTL applied by `set` when the caller passes none (1 hour)
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// TTL used when a "completed" handler refreshes a single entity
pub const ENTITY_REFRESH_TTL_SECS: u64 = 3600;

/// Namespace every logical key is prefixed with
pub const DEFAULT_CACHE_NAMESPACE: &str = "goals-tasks";

/// Separator between namespace and logical key
pub const CACHE_NAMESPACE_SEPARATOR: &str = ":";

// ============================================================================
// EVENT BUS CONSTANTS
// ============================================================================

/// Soft cap on listeners per event name before a diagnostic warning is logged
pub const DEFAULT_MAX_LISTENERS: usize = 100;

// ============================================================================
// NOTIFICATION TYPES
// ============================================================================

/// Notification type sent when a goal is created
pub const NOTIFICATION_GOAL_CREATED: &str = "goal_created";

/// Notification type sent when a task is assigned
pub const NOTIFICATION_TASK_ASSIGNED: &str = "task_assigned";
