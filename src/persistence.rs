use log::{debug, warn};

use crate::{error::TaskError, storage::Storage, task::Task, theme::Theme};

pub const TASKS_KEY: &str = "tasks";
pub const THEME_KEY: &str = "theme";

/// Converts tasks and the theme preference to and from key-value storage.
///
/// Loading never fails: missing or unparseable data yields the default
/// value, and the problem is only logged.
pub struct Persistence {
  storage: Box<dyn Storage>,
}

impl Persistence {
  pub fn new(storage: Box<dyn Storage>) -> Self {
    Self { storage }
  }

  pub fn save(&mut self, tasks: &[Task]) -> Result<(), TaskError> {
    let serialized = serde_json::to_string_pretty(tasks)?;
    self.storage.set(TASKS_KEY, &serialized)
  }

  pub fn load(&self) -> Vec<Task> {
    let tasks: Vec<Task> = self.load_value(TASKS_KEY).unwrap_or_default();
    debug!("restored {} tasks", tasks.len());
    return tasks;
  }

  pub fn save_theme(&mut self, theme: Theme) -> Result<(), TaskError> {
    let serialized = serde_json::to_string(&theme)?;
    self.storage.set(THEME_KEY, &serialized)
  }

  pub fn load_theme(&self) -> Theme {
    self.load_value(THEME_KEY).unwrap_or_default()
  }

  fn load_value<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
    let raw = match self.storage.get(key) {
      Ok(Some(raw)) => raw,
      Ok(None) => return None,
      Err(err) => {
        warn!("couldn't read {}: {}", key, err);
        return None;
      }
    };

    match serde_json::from_str(&raw) {
      Ok(value) => Some(value),
      Err(err) => {
        warn!("stored {} is corrupted, falling back to default: {}", key, err);
        None
      }
    }
  }
}
