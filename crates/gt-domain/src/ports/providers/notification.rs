//! Notification Sender Port

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user-facing notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification type (e.g. `goal_created`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Human readable message
    pub message: String,
    /// Structured payload (ids the client can link to)
    #[serde(default)]
    pub data: Value,
}

impl Notification {
    /// Create a notification without structured data
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            data: Value::Null,
        }
    }

    /// Attach structured data
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}

/// Best-effort notification delivery
///
/// Callers log failures and move on; a notification is never a reason to fail
/// a cache operation.
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver `notification` to `user_id`
    async fn send_notification(&self, user_id: &str, notification: Notification) -> Result<()>;
}
