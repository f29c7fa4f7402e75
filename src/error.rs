//! Error types for the task summarizer service.
//!
//! One taxonomy crosses the whole core: validation problems, missing tasks,
//! summarization-service failures, and store failures. The web layer maps
//! these onto stable outward categories in [`crate::web::errors`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TasksumError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Task {task_id} not found")]
    TaskNotFound { task_id: i64 },

    /// The summarization service failed. Soft during Create/Update: the
    /// mutation commits and the failure rides along as a warning.
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<sqlx::Error> for TasksumError {
    fn from(err: sqlx::Error) -> Self {
        TasksumError::DatabaseError(err.to_string())
    }
}

pub type TasksumResult<T> = Result<T, TasksumError>;
