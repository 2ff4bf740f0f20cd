//! Unit tests for domain events

use chrono::{TimeZone, Utc};
use gt_domain::events::{DomainEvent, EventName};
use serde_json::json;

#[test]
fn test_event_name_matches_variant() {
    let completed_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let cases = vec![
        (
            DomainEvent::GoalCreated {
                goal_id: "g1".into(),
                title: "Ship v1".into(),
                user_id: "u1".into(),
            },
            EventName::GoalCreated,
        ),
        (
            DomainEvent::GoalCompleted {
                goal_id: "g1".into(),
                completed_at,
            },
            EventName::GoalCompleted,
        ),
        (
            DomainEvent::TaskAssigned {
                task_id: "t1".into(),
                assigned_to: "u2".into(),
            },
            EventName::TaskAssigned,
        ),
        (
            DomainEvent::SyncTriggered {
                source: "calendar".into(),
                timestamp: completed_at,
            },
            EventName::SyncTriggered,
        ),
    ];

    for (event, name) in cases {
        assert_eq!(event.name(), name);
    }
}

#[test]
fn test_event_name_string_forms() {
    assert_eq!(EventName::GoalCreated.as_str(), "goal:created");
    assert_eq!(EventName::TaskCompleted.to_string(), "task:completed");
    assert_eq!(
        "task:assigned".parse::<EventName>().unwrap(),
        EventName::TaskAssigned
    );
    assert!("goal:exploded".parse::<EventName>().is_err());
}

#[test]
fn test_every_event_name_parses_back() {
    for name in EventName::ALL {
        assert_eq!(name.as_str().parse::<EventName>().unwrap(), name);
    }
}

#[test]
fn test_event_serializes_with_tag_and_camel_case_fields() {
    let event = DomainEvent::GoalCreated {
        goal_id: "g1".into(),
        title: "Ship v1".into(),
        user_id: "u1".into(),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(
        value,
        json!({"event": "goal:created", "goalId": "g1", "title": "Ship v1", "userId": "u1"})
    );
}

#[test]
fn test_notification_sent_uses_type_field() {
    let value = json!({
        "event": "notification:sent",
        "userId": "u1",
        "type": "goal_created",
        "message": "hello"
    });

    let event: DomainEvent = serde_json::from_value(value).unwrap();
    assert_eq!(
        event,
        DomainEvent::NotificationSent {
            user_id: "u1".into(),
            kind: "goal_created".into(),
            message: "hello".into(),
        }
    );
}
