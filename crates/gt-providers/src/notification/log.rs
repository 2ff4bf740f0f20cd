use async_trait::async_trait;
use gt_domain::error::Result;
use gt_domain::ports::{Notification, NotificationSender};
use tracing::info;

/// Notification sender that writes each notification to the log
#[derive(Debug, Clone, Default)]
pub struct LoggingNotificationSender;

impl LoggingNotificationSender {
    /// Create a new logging sender
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotificationSender for LoggingNotificationSender {
    async fn send_notification(&self, user_id: &str, notification: Notification) -> Result<()> {
        info!(
            user_id = user_id,
            kind = %notification.kind,
            data = %notification.data,
            "{}",
            notification.message
        );
        Ok(())
    }
}
