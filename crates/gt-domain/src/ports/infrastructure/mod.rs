//! Infrastructure ports

/// Event bus ports
pub mod events;

pub use events::{DispatchSummary, EventHandler, EventPublisher, SharedEventHandler};
