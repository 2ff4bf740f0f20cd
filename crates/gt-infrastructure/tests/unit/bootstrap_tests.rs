//! Bootstrap wiring tests

use crate::support::{InMemoryGoals, InMemoryTasks, RecordingNotifier};
use gt_domain::events::{DomainEvent, EventName};
use gt_infrastructure::config::{AppConfig, CacheProviderKind};
use gt_infrastructure::{AppContext, CacheKey, Collaborators};
use std::sync::Arc;

fn collaborators(notifier: Arc<RecordingNotifier>) -> Collaborators {
    Collaborators::new(
        Arc::new(InMemoryGoals::default()),
        Arc::new(InMemoryTasks::default()),
    )
    .with_notifier(notifier)
}

#[tokio::test]
async fn test_bootstrap_wires_single_store_and_bus() {
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = AppContext::bootstrap(AppConfig::default(), collaborators(notifier.clone()))
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&ctx.cache(), &ctx.cache()));
    assert!(Arc::ptr_eq(&ctx.bus(), &ctx.bus()));
    assert_eq!(ctx.cache().provider_name(), "moka");
    assert_eq!(ctx.cache().namespace(), "goals-tasks");
    assert_eq!(ctx.bus().event_names(), EventName::ALL.to_vec());
    assert!(ctx.cache().health_check().await);

    let cache = ctx.cache();
    cache.set(&CacheKey::goals_for_user("u1"), &["g0"], None).await;

    ctx.bus()
        .publish_and_wait(DomainEvent::GoalCreated {
            goal_id: "g1".to_string(),
            title: "Ship v1".to_string(),
            user_id: "u1".to_string(),
        })
        .await;

    assert!(!cache.exists("goals:user:u1").await);
    assert_eq!(notifier.sent().len(), 1);
}

#[tokio::test]
async fn test_disabled_cache_uses_null_provider() {
    let mut config = AppConfig::default();
    config.cache.enabled = false;

    let ctx = AppContext::bootstrap(config, collaborators(Arc::default()))
        .await
        .unwrap();
    let cache = ctx.cache();

    assert_eq!(cache.provider_name(), "null");
    cache.set("goal:g1", &1, None).await;
    assert_eq!(cache.get::<i64>("goal:g1").await, None);
}

#[tokio::test]
async fn test_unreachable_redis_does_not_fail_startup() {
    let mut config = AppConfig::default();
    config.cache.provider = CacheProviderKind::Redis;
    config.cache.redis_url = Some("redis://127.0.0.1:1".to_string());

    let ctx = AppContext::bootstrap(config, collaborators(Arc::default()))
        .await
        .unwrap();

    assert_eq!(ctx.cache().provider_name(), "redis");
    assert!(!ctx.cache().health_check().await);
    assert_eq!(ctx.cache().get::<i64>("goal:g1").await, None);

    let summary = ctx
        .bus()
        .publish_and_wait(DomainEvent::GoalDeleted {
            goal_id: "g1".to_string(),
        })
        .await;
    assert_eq!(summary.failed, 0);
}

#[tokio::test]
async fn test_bus_respects_configured_listener_cap() {
    let mut config = AppConfig::default();
    config.event_bus.max_listeners = 1;

    let ctx = AppContext::bootstrap(config, collaborators(Arc::default()))
        .await
        .unwrap();

    // Over the cap only warns
    assert_eq!(ctx.bus().listener_count(EventName::GoalCreated), 2);
    assert_eq!(ctx.config().event_bus.max_listeners, 1);
    assert_eq!(ctx.handlers().bindings().len(), 12);
}

#[tokio::test]
async fn test_default_collaborators_log_notifications() {
    let collaborators = Collaborators::new(
        Arc::new(InMemoryGoals::default()),
        Arc::new(InMemoryTasks::default()),
    );
    let ctx = AppContext::bootstrap(AppConfig::default(), collaborators)
        .await
        .unwrap();

    let summary = ctx
        .bus()
        .publish_and_wait(DomainEvent::TaskAssigned {
            task_id: "t1".to_string(),
            assigned_to: "u7".to_string(),
        })
        .await;

    assert_eq!((summary.delivered, summary.failed), (1, 0));
}
