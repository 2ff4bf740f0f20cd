//! # Goals/Tasks Domain Layer
//!
//! Core types and port traits for the goals/tasks cache-consistency layer.
//! This crate has no I/O of its own; adapters live in `gt-providers` and the
//! wiring lives in `gt-infrastructure`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`events`] | Closed set of domain events and their names |
//! | [`entities`] | `Goal` and `Task` read-models cached by the service |
//! | [`ports`] | Cache, notification and event-handler contracts |
//! | [`repositories`] | Authoritative lookups used on cache misses |
//! | [`error`] | Domain error type and `Result` alias |

/// Domain layer constants
pub mod constants;
/// Entities cached by the service
pub mod entities;
/// Error handling types
pub mod error;
/// Domain events
pub mod events;
/// Port traits implemented by providers
pub mod ports;
/// Repository interfaces for the system of record
pub mod repositories;

pub use error::{Error, Result};
pub use events::{DomainEvent, EventName};
