use chrono::Datelike;

use crate::{error::TaskError, traits::Indexable};

pub type TaskId = u64;

pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a calendar date and returns it as zero-padded `YYYY-MM-DD`, so
/// due dates order correctly as plain strings.
pub fn normalize_due_date(input: &str) -> Result<String, TaskError> {
  let date = chrono::NaiveDate::parse_from_str(input.trim(), DUE_DATE_FORMAT)
    .map_err(|err| TaskError::Validation(format!("expected YYYY-MM-DD, got {}: {}", input, err)))?;
  if !(1000..=9999).contains(&date.year()) {
    return Err(TaskError::Validation(format!(
      "expected a four-digit year, got {}",
      input
    )));
  }
  return Ok(date.format(DUE_DATE_FORMAT).to_string());
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
  High,
  Medium,
  Low,
  // Anything else found in stored data, kept verbatim.
  Other(String),
}

impl Priority {
  pub const KNOWN: [&'static str; 3] = ["High", "Medium", "Low"];

  pub fn rank(&self) -> u8 {
    match self {
      Priority::High => 1,
      Priority::Medium => 2,
      Priority::Low => 3,
      Priority::Other(_) => u8::MAX,
    }
  }

  pub fn as_str(&self) -> &str {
    match self {
      Priority::High => "High",
      Priority::Medium => "Medium",
      Priority::Low => "Low",
      Priority::Other(value) => value.as_str(),
    }
  }
}

impl Default for Priority {
  fn default() -> Self {
    Priority::Medium
  }
}

impl From<String> for Priority {
  fn from(value: String) -> Self {
    match value.as_str() {
      "High" => Priority::High,
      "Medium" => Priority::Medium,
      "Low" => Priority::Low,
      _ => Priority::Other(value),
    }
  }
}

impl From<Priority> for String {
  fn from(priority: Priority) -> Self {
    priority.as_str().to_owned()
  }
}

impl std::str::FromStr for Priority {
  type Err = String;

  /// Accepts only the three known ranks, case-insensitively.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "high" => Ok(Priority::High),
      "medium" => Ok(Priority::Medium),
      "low" => Ok(Priority::Low),
      _ => Err(format!(
        "unknown priority: {}, expected one of: {}",
        s,
        Priority::KNOWN.join(", ")
      )),
    }
  }
}

impl std::fmt::Display for Priority {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  id: TaskId,
  name: String,
  due_date: Option<String>,
  priority: Priority,
  category: String,
  completed: bool,
}

impl Indexable for Task {
  fn id(&self) -> TaskId {
    self.id
  }
}

impl Task {
  pub fn new(
    id: TaskId,
    name: &str,
    due_date: Option<String>,
    priority: Priority,
    category: &str,
  ) -> Self {
    Self {
      id,
      name: name.to_owned(),
      due_date,
      priority,
      category: category.to_owned(),
      completed: false,
    }
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn due_date(&self) -> Option<&str> {
    self.due_date.as_deref()
  }

  pub fn priority(&self) -> &Priority {
    &self.priority
  }

  pub fn category(&self) -> &str {
    self.category.as_str()
  }

  pub fn is_completed(&self) -> bool {
    self.completed
  }

  pub(crate) fn toggle(&mut self) {
    self.completed = !self.completed;
  }

  pub(crate) fn rename(&mut self, name: &str) {
    self.name = name.to_owned();
  }
}
