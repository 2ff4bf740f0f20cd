//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the goals/tasks cache-consistency
//! layer. Backend adapters live in `gt-providers`; this crate composes them.
//!
//! ## Module Categories
//!
//! ### Data & Consistency
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Namespaced, soft-failing cache store with cache-aside helpers |
//! | [`handlers`] | Event → cache invalidation and notification bindings |
//!
//! ### Configuration & Wiring
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`bootstrap`] | Builds the single cache store and event bus of a process |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod handlers;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{AppContext, Collaborators};
pub use cache::{CacheKey, CacheStore};
pub use error_ext::ErrorContext;
