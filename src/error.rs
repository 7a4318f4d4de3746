use crate::task::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
  #[error("validation error: {0}")]
  Validation(String),

  #[error("task with id: {0} not found")]
  NotFound(TaskId),

  #[error("storage error: {0}")]
  Storage(String),
}

impl From<std::io::Error> for TaskError {
  fn from(err: std::io::Error) -> Self {
    TaskError::Storage(err.to_string())
  }
}

impl From<serde_json::Error> for TaskError {
  fn from(err: serde_json::Error) -> Self {
    TaskError::Storage(err.to_string())
  }
}
