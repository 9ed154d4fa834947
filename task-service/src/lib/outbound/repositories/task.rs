use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::task::errors::TaskError;
use crate::domain::task::models::Task;
use crate::domain::task::models::TaskId;
use crate::domain::task::models::TaskTitle;
use crate::domain::task::ports::TaskRepository;
use crate::domain::user::models::UserId;

pub struct PostgresTaskRepository {
    pool: PgPool,
}

impl PostgresTaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<TaskRow> for Task {
    type Error = TaskError;

    fn try_from(row: TaskRow) -> Result<Self, Self::Error> {
        Ok(Task {
            id: TaskId(row.id),
            title: TaskTitle::new(row.title)?,
            description: row.description,
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn create(&self, task: Task) -> Result<Task, TaskError> {
        sqlx::query(
            r#"
            INSERT INTO tasks (id, title, description, owner_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(task.id.0)
        .bind(task.title.as_str())
        .bind(task.description.as_deref())
        .bind(task.owner_id.0)
        .bind(task.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            // Owner deleted between the existence check and the insert.
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return TaskError::OwnerNotFound(task.owner_id.to_string());
                }
            }
            TaskError::DatabaseError(e.to_string())
        })?;

        Ok(task)
    }

    async fn list_by_owner(&self, owner: &UserId) -> Result<Vec<Task>, TaskError> {
        let rows = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT id, title, description, owner_id, created_at
            FROM tasks
            WHERE owner_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TaskError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Task::try_from).collect()
    }
}
