use crate::error::TaskError;

/// String-valued key-value storage.
pub trait Storage {
  /// `Ok(None)` when nothing was ever stored under `key`.
  fn get(&self, key: &str) -> Result<Option<String>, TaskError>;
  fn set(&mut self, key: &str, value: &str) -> Result<(), TaskError>;
}
