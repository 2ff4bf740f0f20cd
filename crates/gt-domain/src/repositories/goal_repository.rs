use crate::entities::Goal;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to goals in the system of record
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find a goal by id, `None` when it does not exist
    async fn find_by_id(&self, goal_id: &str) -> Result<Option<Goal>>;
}
