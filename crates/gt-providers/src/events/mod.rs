//! Event Bus Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`InProcessEventBus`] | In-Process | Ordered subscriber registry with awaited and fire-and-forget dispatch |

pub mod in_process;

pub use in_process::InProcessEventBus;

pub use gt_domain::events::{DomainEvent, EventName};
pub use gt_domain::ports::{DispatchSummary, EventHandler, EventPublisher, SharedEventHandler};
