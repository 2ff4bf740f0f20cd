//! Entities cached by the service
//!
//! These are read-models as returned by the system of record. The cache layer
//! stores them serialized and never mutates them.

/// Goal entity
pub mod goal;
/// Task entity
pub mod task;

pub use goal::{Goal, GoalStatus};
pub use task::{Task, TaskStatus};
