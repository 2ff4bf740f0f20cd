//! Cache key tests

use gt_infrastructure::CacheKey;

#[test]
fn test_read_model_keys() {
    assert_eq!(CacheKey::goal("g1"), "goal:g1");
    assert_eq!(CacheKey::goals_for_user("u1"), "goals:user:u1");
    assert_eq!(CacheKey::task("t1"), "task:t1");
    assert_eq!(CacheKey::tasks_for_goal("g1"), "tasks:goal:g1");
}

#[test]
fn test_namespacing() {
    let key = CacheKey::namespaced("goals-tasks", "goal:g1");
    assert_eq!(key, "goals-tasks:goal:g1");

    assert_eq!(CacheKey::strip_namespace("goals-tasks", &key), Some("goal:g1"));
    assert_eq!(CacheKey::strip_namespace("goals", &key), None);
    assert_eq!(CacheKey::strip_namespace("other", &key), None);
}

#[test]
fn test_key_validation() {
    assert!(CacheKey::validate_key("goal:g1").is_ok());
    assert!(CacheKey::validate_key("").is_err());
    assert!(CacheKey::validate_key("goal:\u{7}").is_err());
    assert!(CacheKey::validate_key(&"k".repeat(4096)).is_ok());
}
