//! Test doubles shared by the suites

#![allow(dead_code)]

use async_trait::async_trait;
use gt_domain::entities::{Goal, Task};
use gt_domain::error::{Error, Result};
use gt_domain::ports::{CacheProvider, Notification, NotificationSender};
use gt_domain::repositories::{GoalRepository, TaskRepository};
use gt_infrastructure::CacheStore;
use gt_providers::cache::{MokaCacheProvider, RedisCacheProvider};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const NAMESPACE: &str = "goals-tasks";

/// Store over a fresh in-memory provider
pub fn moka_store() -> Arc<CacheStore> {
    Arc::new(CacheStore::new(
        Arc::new(MokaCacheProvider::new()),
        NAMESPACE,
        Duration::from_secs(3600),
    ))
}

/// Store over a provider shared with other stores
pub fn store_over(provider: Arc<dyn CacheProvider>, namespace: &str) -> CacheStore {
    CacheStore::new(provider, namespace, Duration::from_secs(3600))
}

/// Store whose Redis backend refuses every connection
pub fn unreachable_store() -> CacheStore {
    let provider = RedisCacheProvider::new("redis://127.0.0.1:1").unwrap();
    store_over(Arc::new(provider), NAMESPACE)
}

/// Goal repository backed by a map; `fail` makes every lookup error
#[derive(Default)]
pub struct InMemoryGoals {
    goals: Mutex<HashMap<String, Goal>>,
    pub fail: bool,
}

impl InMemoryGoals {
    pub fn with(goals: impl IntoIterator<Item = Goal>) -> Self {
        Self {
            goals: Mutex::new(goals.into_iter().map(|g| (g.id.clone(), g)).collect()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl GoalRepository for InMemoryGoals {
    async fn find_by_id(&self, goal_id: &str) -> Result<Option<Goal>> {
        if self.fail {
            return Err(Error::repository("goal store unavailable"));
        }
        Ok(self.goals.lock().unwrap().get(goal_id).cloned())
    }
}

/// Task repository backed by a map
#[derive(Default)]
pub struct InMemoryTasks {
    tasks: Mutex<HashMap<String, Task>>,
}

impl InMemoryTasks {
    pub fn with(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks.into_iter().map(|t| (t.id.clone(), t)).collect()),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTasks {
    async fn find_by_id(&self, task_id: &str) -> Result<Option<Task>> {
        Ok(self.tasks.lock().unwrap().get(task_id).cloned())
    }
}

/// Notification sender that records every delivery
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, Notification)>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(String, Notification)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationSender for RecordingNotifier {
    async fn send_notification(&self, user_id: &str, notification: Notification) -> Result<()> {
        if self.fail {
            return Err(Error::notification("push gateway down"));
        }
        self.sent
            .lock()
            .unwrap()
            .push((user_id.to_string(), notification));
        Ok(())
    }
}
