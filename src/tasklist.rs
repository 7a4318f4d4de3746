use log::{debug, warn};

use crate::{
  command::{Command, Notification},
  config::Config,
  error::TaskError,
  persistence::Persistence,
  storage::JsonStorage,
  store::TaskStore,
  task::Task,
  theme::Theme,
  view::{self, Projection, Query},
};

/// Owns the session state: the task store, its persistence and the theme.
pub struct Tasklist {
  store: TaskStore,
  persistence: Persistence,
  theme: Theme,
}

impl Tasklist {
  pub fn new(config: &Config) -> Self {
    debug!("tasklist data folder: {}", config.storage_dir_path);
    let storage = JsonStorage::new(&config.storage_dir_path);
    return Self::open(Persistence::new(Box::new(storage)));
  }

  pub fn open(persistence: Persistence) -> Self {
    let store = TaskStore::from_tasks(persistence.load());
    let theme = persistence.load_theme();
    Self {
      store,
      persistence,
      theme,
    }
  }

  pub fn tasks(&self) -> &[Task] {
    self.store.all()
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn projection(&self, query: &Query) -> Projection {
    view::project(self.store.all(), query)
  }

  /// Runs one command and persists its result. A failed command leaves
  /// everything untouched; a failed save keeps the in-memory change.
  pub fn dispatch(&mut self, command: Command) -> Notification {
    debug!("dispatch command: {:?}", command);
    let mutates_tasks = command.mutates_tasks();

    let notification = match self.apply(command) {
      Ok(notification) => notification,
      Err(notification) => return notification,
    };

    let saved = match mutates_tasks {
      true => self.persistence.save(self.store.all()),
      false => self.persistence.save_theme(self.theme),
    };

    match saved {
      Ok(_) => notification,
      Err(err) => {
        warn!("couldn't save changes: {}", err);
        Notification::warning(&format!("{} (changes not saved)", notification.message))
      }
    }
  }

  fn apply(&mut self, command: Command) -> Result<Notification, Notification> {
    match command {
      Command::Add {
        name,
        due_date,
        priority,
        category,
      } => match self.store.add(&name, due_date, priority, &category) {
        Ok(_) => Ok(Notification::success("Task added successfully!")),
        Err(TaskError::Validation(_)) if name.trim().is_empty() => {
          Err(Notification::warning("Please enter a task name."))
        }
        Err(err) => Err(error_notification(&err)),
      },

      Command::Toggle(id) => match self.store.toggle_complete(id) {
        Ok(task) if task.is_completed() => Ok(Notification::info("Task marked as done.")),
        Ok(_) => Ok(Notification::info("Task marked as not done.")),
        Err(err) => Err(error_notification(&err)),
      },

      Command::Rename(id, name) => match self.store.rename(id, &name) {
        Ok(_) => Ok(Notification::info("Task updated.")),
        Err(TaskError::Validation(_)) => Err(Notification::warning("Task name unchanged.")),
        Err(err) => Err(error_notification(&err)),
      },

      Command::Remove(id) => match self.store.remove(id) {
        Ok(_) => Ok(Notification::danger("Task deleted.")),
        Err(err) => Err(error_notification(&err)),
      },

      Command::RemoveCompleted => {
        let removed = self.store.remove_all_completed();
        debug!("removed {} completed tasks", removed);
        Ok(Notification::info(&format!(
          "Completed tasks deleted ({}).",
          removed
        )))
      }

      Command::SetTheme(theme) => {
        self.theme = theme;
        Ok(theme_notification(theme))
      }

      Command::ToggleTheme => {
        self.theme = self.theme.toggled();
        Ok(theme_notification(self.theme))
      }
    }
  }
}

fn theme_notification(theme: Theme) -> Notification {
  Notification::info(&format!("Theme switched to {}.", theme))
}

fn error_notification(err: &TaskError) -> Notification {
  match err {
    TaskError::Validation(msg) => Notification::warning(msg),
    TaskError::NotFound(id) => Notification::danger(&format!("Task {} not found.", id)),
    TaskError::Storage(msg) => Notification::warning(msg),
  }
}
