use std::io::Write;

use log::debug;

use crate::error::TaskError;

use super::storage::Storage;

/// Keeps every key as `<key>.json` inside one folder.
pub struct JsonStorage {
  database_folder: std::path::PathBuf,
}

impl JsonStorage {
  pub fn new(database_folder: &str) -> Self {
    debug!("json storage folder: {}", database_folder);
    Self {
      database_folder: std::path::Path::new(database_folder).to_path_buf(),
    }
  }

  pub fn filepath(&self, key: &str) -> std::path::PathBuf {
    self.database_folder.join(format!("{}.json", key))
  }
}

impl Storage for JsonStorage {
  fn get(&self, key: &str) -> Result<Option<String>, TaskError> {
    let filepath = self.filepath(key);
    match std::fs::read_to_string(&filepath) {
      Ok(content) if content.trim().is_empty() => Ok(None),
      Ok(content) => {
        debug!("read {} bytes from: {}", content.len(), filepath.display());
        Ok(Some(content))
      }
      Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  fn set(&mut self, key: &str, value: &str) -> Result<(), TaskError> {
    std::fs::create_dir_all(&self.database_folder)?;

    let filepath = self.filepath(key);
    let mut file = std::fs::OpenOptions::new()
      .create(true)
      .write(true)
      .truncate(true)
      .open(&filepath)?;
    file.write_all(value.as_bytes())?;
    file.flush()?;

    debug!("wrote {} bytes to: {}", value.len(), filepath.display());
    Ok(())
  }
}
