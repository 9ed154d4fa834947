use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::CreateTaskCommand;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::ports::TaskRepository;
use crate::domain::task::ports::TaskServicePort;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for the user-owns-tasks relationship.
pub struct TaskService<TR, UR>
where
    TR: TaskRepository,
    UR: UserRepository,
{
    tasks: Arc<TR>,
    users: Arc<UR>,
}

impl<TR, UR> TaskService<TR, UR>
where
    TR: TaskRepository,
    UR: UserRepository,
{
    pub fn new(tasks: Arc<TR>, users: Arc<UR>) -> Self {
        Self { tasks, users }
    }

    async fn ensure_owner_exists(&self, owner: &UserId) -> Result<(), TaskError> {
        self.users
            .find_by_id(owner)
            .await
            .map_err(|e| TaskError::DatabaseError(e.to_string()))?
            .map(|_| ())
            .ok_or(TaskError::OwnerNotFound(owner.to_string()))
    }
}

#[async_trait]
impl<TR, UR> TaskServicePort for TaskService<TR, UR>
where
    TR: TaskRepository,
    UR: UserRepository,
{
    async fn create_task(
        &self,
        actor: &UserId,
        owner: &UserId,
        command: CreateTaskCommand,
    ) -> Result<Task, TaskError> {
        if actor != owner {
            return Err(TaskError::Forbidden);
        }

        self.ensure_owner_exists(owner).await?;

        let task = Task {
            id: TaskId::new(),
            title: command.title,
            description: command.description,
            owner_id: *owner,
            created_at: Utc::now(),
        };

        let created = self.tasks.create(task).await?;
        tracing::info!(task_id = %created.id, owner_id = %owner, "Task created");

        Ok(created)
    }

    async fn list_tasks(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        self.ensure_owner_exists(owner).await?;
        self.tasks.list_by_owner(owner).await
    }
}
