use async_trait::async_trait;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::user::models::UserId;

/// Port for task domain service operations.
#[async_trait]
pub trait TaskServicePort: Send + Sync + 'static {
    /// Create a task owned by `owner` on behalf of `actor`.
    ///
    /// # Errors
    /// * `Forbidden` - `actor` is not `owner`
    /// * `OwnerNotFound` - Owner does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_task(
        &self,
        actor: &UserId,
        owner: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError>;

    /// List the tasks owned by `owner`, oldest first.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;
}

/// Persistence operations for tasks.
#[async_trait]
pub trait TaskRepository: Send + Sync + 'static {
    /// Persist a new task.
    ///
    /// # Errors
    /// * `OwnerNotFound` - Owner row is missing (foreign key)
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, task: Task) -> Result<Task, TaskError>;

    /// Retrieve all tasks of an owner, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError>;
}
