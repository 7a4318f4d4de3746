use log::debug;

use crate::{error::TaskError, task::Priority};

const TASKLIST_DEFAULT_STORAGE_DIR: &str = ".tasklist";
const TASKLIST_DEFAULT_CONFIG_NAME: &str = ".tasklist.json";
const TASKLIST_CONFIG_ENV: &str = "TASKLIST_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Config {
  pub storage_dir_path: String,
  #[serde(default)]
  pub default_priority: Priority,
  #[serde(default = "default_categories")]
  pub categories: Vec<String>,
}

fn default_categories() -> Vec<String> {
  ["Work", "Personal", "Shopping", "Other"]
    .iter()
    .map(|c| c.to_string())
    .collect()
}

fn home_dir(home_env: Option<String>) -> Result<std::path::PathBuf, TaskError> {
  match home_env {
    Some(home) if !home.is_empty() => Ok(std::path::PathBuf::from(home)),
    _ => Err(TaskError::Validation(
      "HOME is not set, can't locate the config file".to_owned(),
    )),
  }
}

impl Config {
  pub fn with_storage_dir(storage_dir_path: &str) -> Self {
    Self {
      storage_dir_path: storage_dir_path.to_owned(),
      default_priority: Priority::default(),
      categories: default_categories(),
    }
  }

  /// Reads `$TASKLIST_CONFIG` or `$HOME/.tasklist.json`, writing the
  /// defaults there first if the file doesn't exist yet.
  pub fn load() -> Result<Self, TaskError> {
    let home = home_dir(std::env::var("HOME").ok())?;

    let config_file_path = match std::env::var(TASKLIST_CONFIG_ENV) {
      Ok(file_path) => std::path::Path::new(&file_path).to_path_buf(),
      Err(_) => home.join(TASKLIST_DEFAULT_CONFIG_NAME),
    };
    debug!("tasklist config: {}", config_file_path.display());

    let default_storage_dir = home.join(TASKLIST_DEFAULT_STORAGE_DIR);
    return Self::load_from(
      &config_file_path,
      default_storage_dir.to_string_lossy().as_ref(),
    );
  }

  pub fn load_from(
    config_file_path: &std::path::Path,
    default_storage_dir: &str,
  ) -> Result<Self, TaskError> {
    if !config_file_path.exists() {
      let config = Self::with_storage_dir(default_storage_dir);
      if let Some(parent) = config_file_path.parent() {
        std::fs::create_dir_all(parent)?;
      }
      let file = std::fs::File::create(config_file_path)?;
      serde_json::to_writer_pretty(file, &config)?;
      return Ok(config);
    }

    let file = std::fs::File::open(config_file_path)?;
    let config: Self = serde_json::from_reader(file)?;
    if config.categories.is_empty() {
      return Err(TaskError::Validation(
        "config must list at least one category".to_owned(),
      ));
    }
    if let Priority::Other(priority) = &config.default_priority {
      return Err(TaskError::Validation(format!(
        "unknown default priority: {}",
        priority
      )));
    }
    return Ok(config);
  }

  pub fn default_category(&self) -> &str {
    self
      .categories
      .first()
      .map(|c| c.as_str())
      .unwrap_or("Other")
  }
}

#[cfg(test)]
mod tests {
  use super::{home_dir, Config};
  use crate::{error::TaskError, task::Priority};

  #[test]
  fn missing_config_is_created_with_defaults() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_path = tmp_dir.path().join("nested").join("tasklist.json");

    let config = Config::load_from(&config_path, "/tmp/tasklist-data").unwrap();
    assert_eq!(config.storage_dir_path, "/tmp/tasklist-data");
    assert_eq!(config.default_priority, Priority::Medium);
    assert_eq!(config.default_category(), "Work");
    assert!(config_path.exists());

    let reread = Config::load_from(&config_path, "/elsewhere").unwrap();
    assert_eq!(reread, config);
  }

  #[test]
  fn partial_config_fills_defaults() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_path = tmp_dir.path().join("tasklist.json");
    std::fs::write(&config_path, r#"{"storage_dir_path": "/data"}"#).unwrap();

    let config = Config::load_from(&config_path, "/unused").unwrap();
    assert_eq!(config.storage_dir_path, "/data");
    assert_eq!(config.categories.len(), 4);
  }

  #[test]
  fn empty_categories_are_rejected() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_path = tmp_dir.path().join("tasklist.json");
    std::fs::write(
      &config_path,
      r#"{"storage_dir_path": "/data", "default_priority": "High", "categories": []}"#,
    )
    .unwrap();

    assert!(matches!(
      Config::load_from(&config_path, "/unused"),
      Err(TaskError::Validation(_))
    ));
  }

  #[test]
  fn unknown_default_priority_is_rejected() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_path = tmp_dir.path().join("tasklist.json");
    std::fs::write(
      &config_path,
      r#"{"storage_dir_path": "/data", "default_priority": "Urgent"}"#,
    )
    .unwrap();

    assert!(matches!(
      Config::load_from(&config_path, "/unused"),
      Err(TaskError::Validation(_))
    ));
  }

  #[test]
  fn missing_home_is_a_config_error() {
    assert!(matches!(home_dir(None), Err(TaskError::Validation(_))));
    assert!(matches!(home_dir(Some(String::new())), Err(TaskError::Validation(_))));
    assert_eq!(
      home_dir(Some("/home/me".to_owned())).unwrap(),
      std::path::PathBuf::from("/home/me")
    );
  }

  #[test]
  fn broken_config_is_an_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config_path = tmp_dir.path().join("tasklist.json");
    std::fs::write(&config_path, "{").unwrap();

    assert!(matches!(
      Config::load_from(&config_path, "/unused"),
      Err(TaskError::Storage(_))
    ));
  }
}
