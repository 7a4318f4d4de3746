use std::collections::HashMap;

use crate::error::TaskError;

use super::storage::Storage;

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
  values: HashMap<String, String>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }
}

impl Storage for MemoryStorage {
  fn get(&self, key: &str) -> Result<Option<String>, TaskError> {
    Ok(self.values.get(key).cloned())
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), TaskError> {
    self.values.insert(key.to_owned(), value.to_owned());
    Ok(())
  }
}
