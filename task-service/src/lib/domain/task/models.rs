use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::task::errors::TitleError;
use crate::domain::user::models::UserId;

/// Task entity owned by exactly one user.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: TaskId,
    pub title: TaskTitle,
    pub description: Option<String>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Task unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Task title value type
///
/// Trimmed, 1-200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTitle(String);

impl TaskTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new valid title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty after trimming
    /// * `TooLong` - Title longer than 200 characters
    pub fn new(title: String) -> Result<Self, TitleError> {
        let title = title.trim();
        let length = title.chars().count();

        if length == 0 {
            return Err(TitleError::Empty);
        }
        if length > Self::MAX_LENGTH {
            return Err(TitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(title.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a task for a user
#[derive(Debug)]
pub struct CreateTaskCommand {
    pub title: TaskTitle,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_trimmed() {
        let title = TaskTitle::new("  Buy milk\n".to_string()).unwrap();
        assert_eq!(title.as_str(), "Buy milk");
    }

    #[test]
    fn test_title_empty() {
        assert_eq!(TaskTitle::new(" ".to_string()), Err(TitleError::Empty));
    }

    #[test]
    fn test_title_too_long() {
        assert_eq!(
            TaskTitle::new("t".repeat(201)),
            Err(TitleError::TooLong {
                max: 200,
                actual: 201
            })
        );
    }
}
