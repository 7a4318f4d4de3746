use log::debug;

use crate::{
  error::TaskError,
  task::{normalize_due_date, Priority, Task, TaskId},
  traits::Indexable,
};

/// Ordered collection of tasks. Insertion order is the canonical order.
#[derive(Debug, Default, Clone)]
pub struct TaskStore {
  tasks: Vec<Task>,
  last_id: TaskId,
}

impl TaskStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_tasks(tasks: Vec<Task>) -> Self {
    let last_id = tasks.iter().map(|t| t.id()).max().unwrap_or_default();
    Self { tasks, last_id }
  }

  pub fn add(
    &mut self,
    name: &str,
    due_date: Option<String>,
    priority: Priority,
    category: &str,
  ) -> Result<Task, TaskError> {
    let name = validate_name(name)?;
    let due_date = match due_date {
      Some(due_date) => Some(normalize_due_date(&due_date)?),
      None => None,
    };
    let task = Task::new(self.next_id()?, name, due_date, priority, category);
    debug!("add task id: {} name: {}", task.id(), task.name());

    self.tasks.push(task.clone());
    return Ok(task);
  }

  pub fn toggle_complete(&mut self, id: TaskId) -> Result<&Task, TaskError> {
    let task = self.get_mut(id)?;
    task.toggle();
    return Ok(task);
  }

  pub fn rename(&mut self, id: TaskId, new_name: &str) -> Result<&Task, TaskError> {
    let new_name = validate_name(new_name)?;
    let task = self.get_mut(id)?;
    task.rename(new_name);
    return Ok(task);
  }

  pub fn remove(&mut self, id: TaskId) -> Result<Task, TaskError> {
    match self.position_by_id(id) {
      Some(position) => Ok(self.tasks.remove(position)),
      None => Err(TaskError::NotFound(id)),
    }
  }

  pub fn remove_all_completed(&mut self) -> usize {
    let before = self.tasks.len();
    self.tasks.retain(|t| !t.is_completed());
    return before - self.tasks.len();
  }

  pub fn all(&self) -> &[Task] {
    &self.tasks
  }

  pub fn get(&self, id: TaskId) -> Option<&Task> {
    self.tasks.iter().find(|t| t.id() == id)
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, TaskError> {
    self
      .tasks
      .iter_mut()
      .find(|t| t.id() == id)
      .ok_or(TaskError::NotFound(id))
  }

  fn position_by_id(&self, id: TaskId) -> Option<usize> {
    self.tasks.iter().position(|t| t.id() == id)
  }

  // Creation time in milliseconds, bumped past the last issued id when the
  // clock hasn't moved.
  fn next_id(&mut self) -> Result<TaskId, TaskError> {
    let now = chrono::Local::now().timestamp_millis().max(0) as TaskId;
    let bumped = self
      .last_id
      .checked_add(1)
      .ok_or_else(|| TaskError::Validation("no task ids left after the largest stored id".to_owned()))?;
    self.last_id = now.max(bumped);
    return Ok(self.last_id);
  }
}

fn validate_name(name: &str) -> Result<&str, TaskError> {
  let trimmed = name.trim();
  if trimmed.is_empty() {
    return Err(TaskError::Validation("task name is empty".to_owned()));
  }
  return Ok(trimmed);
}
