//! Notification Sender Implementations
//!
//! Delivery channels (push, email) are external collaborators; the provider
//! here records notifications in the structured log.

pub mod log;

pub use log::LoggingNotificationSender;
