use thiserror::Error;

/// Error for task title validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all task-related operations
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] TitleError),

    #[error("User not found: {0}")]
    OwnerNotFound(String),

    #[error("Not allowed to create tasks for another user")]
    Forbidden,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
