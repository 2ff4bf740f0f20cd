use crate::entities::Task;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to tasks in the system of record
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by id, `None` when it does not exist
    async fn find_by_id(&self, task_id: &str) -> Result<Option<Task>>;
}
