use crate::{
  task::{Priority, TaskId},
  theme::Theme,
};

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Add {
    name: String,
    due_date: Option<String>,
    priority: Priority,
    category: String,
  },
  Toggle(TaskId),
  Rename(TaskId, String),
  Remove(TaskId),
  RemoveCompleted,
  SetTheme(Theme),
  ToggleTheme,
}

impl Command {
  pub fn mutates_tasks(&self) -> bool {
    !matches!(self, Command::SetTheme(_) | Command::ToggleTheme)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
  Success,
  Warning,
  Info,
  Danger,
}

/// Transient outcome of a command, shown to the user once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub level: AlertLevel,
  pub message: String,
}

impl Notification {
  pub fn new(level: AlertLevel, message: &str) -> Self {
    Self {
      level,
      message: message.to_owned(),
    }
  }

  pub fn success(message: &str) -> Self {
    Self::new(AlertLevel::Success, message)
  }

  pub fn warning(message: &str) -> Self {
    Self::new(AlertLevel::Warning, message)
  }

  pub fn info(message: &str) -> Self {
    Self::new(AlertLevel::Info, message)
  }

  pub fn danger(message: &str) -> Self {
    Self::new(AlertLevel::Danger, message)
  }
}
