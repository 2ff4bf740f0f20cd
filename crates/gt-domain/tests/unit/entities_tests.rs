//! Unit tests for cached entities

use chrono::Utc;
use gt_domain::entities::{Goal, GoalStatus, Task, TaskStatus};

#[test]
fn test_goal_completion() {
    let now = Utc::now();
    let goal = Goal::new("g1", "u1", "Ship v1").complete(now);

    assert_eq!(goal.status, GoalStatus::Completed);
    assert_eq!(goal.completed_at, Some(now));
}

#[test]
fn test_task_json_shape() {
    let task = Task::new("t1", "g1", "Write docs");
    let json = serde_json::to_value(&task).unwrap();

    assert_eq!(json["goalId"], "g1");
    assert_eq!(json["status"], "pending");
    assert!(json.get("assignedTo").is_none());

    let back: Task = serde_json::from_value(json).unwrap();
    assert_eq!(back.status, TaskStatus::Pending);
}
