//! Repository Interfaces
//!
//! Authoritative lookups into the system of record. The cache layer only
//! reads through these; persistence itself is owned by the caller.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`GoalRepository`] | Goal lookups by id |
//! | [`TaskRepository`] | Task lookups by id |

/// Goal repository interface
pub mod goal_repository;
/// Task repository interface
pub mod task_repository;

pub use goal_repository::GoalRepository;
pub use task_repository::TaskRepository;
