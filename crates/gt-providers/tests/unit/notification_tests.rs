//! Notification sender tests

use gt_domain::ports::Notification;
use gt_providers::NotificationSender;
use gt_providers::notification::LoggingNotificationSender;
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_logging_sender_accepts_notifications() {
    let sender = LoggingNotificationSender::new();
    let notification = Notification::new("goal_created", "Goal \"Ship v1\" has been created")
        .with_data(json!({ "goalId": "g1" }));

    assert!(sender.send_notification("u1", notification).await.is_ok());
}

#[tokio::test]
async fn test_logging_sender_works_behind_the_port() {
    let sender: Arc<dyn NotificationSender> = Arc::new(LoggingNotificationSender::default());

    assert!(
        sender
            .send_notification("u7", Notification::new("task_assigned", "assigned"))
            .await
            .is_ok()
    );
}
