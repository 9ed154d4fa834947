use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::TaskData;
use crate::domain::task::models::Task;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Profile of a user with the tasks it owns nested inline.
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<UserProfileData>, ApiError> {
    let user_id = UserId::from_string(&user_id)?;

    let user = state.user_service.get_user(&user_id).await?;
    let tasks = state.task_service.list_tasks(&user_id).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        UserProfileData::new(&user, &tasks),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfileData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<TaskData>,
}

impl UserProfileData {
    fn new(user: &User, tasks: &[Task]) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
            tasks: tasks.iter().map(TaskData::from).collect(),
        }
    }
}
