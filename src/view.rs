use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::task::Task;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
  #[default]
  All,
  Only(String),
}

impl From<&str> for CategoryFilter {
  fn from(value: &str) -> Self {
    match value {
      ALL_CATEGORIES => CategoryFilter::All,
      category => CategoryFilter::Only(category.to_owned()),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
  Name,
  Date,
  Priority,
}

impl SortMode {
  pub const VARIANTS: [&'static str; 3] = ["name", "date", "priority"];
}

impl std::str::FromStr for SortMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "name" => Ok(SortMode::Name),
      "date" => Ok(SortMode::Date),
      "priority" => Ok(SortMode::Priority),
      _ => Err(format!("unknown sort mode: {}", s)),
    }
  }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Query {
  pub search: String,
  pub category: CategoryFilter,
  pub sort: Option<SortMode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
  pub tasks: Vec<Task>,
  pub completion_percent: u8,
}

pub fn project(tasks: &[Task], query: &Query) -> Projection {
  let search = query.search.to_lowercase();

  let mut visible: Vec<Task> = tasks
    .iter()
    .filter(|t| t.name().to_lowercase().contains(&search))
    .filter(|t| match &query.category {
      CategoryFilter::All => true,
      CategoryFilter::Only(category) => t.category() == category,
    })
    .cloned()
    .collect();

  // `sort_by` is stable, ties keep store order.
  match query.sort {
    Some(SortMode::Name) => visible.sort_by(|a, b| compare_names(a.name(), b.name())),
    Some(SortMode::Date) => {
      visible.sort_by(|a, b| a.due_date().unwrap_or("").cmp(b.due_date().unwrap_or("")))
    }
    Some(SortMode::Priority) => visible.sort_by_key(|t| t.priority().rank()),
    None => {}
  }

  return Projection {
    tasks: visible,
    completion_percent: completion_percent(tasks),
  };
}

pub fn completion_percent(tasks: &[Task]) -> u8 {
  if tasks.is_empty() {
    return 0;
  }
  let completed = tasks.iter().filter(|t| t.is_completed()).count();
  return (100.0 * completed as f64 / tasks.len() as f64).round() as u8;
}

// Accent- and case-insensitive first, so "Écrire" sorts among the e's. Ties
// put unaccented before accented, then lowercase before uppercase, as
// collation does.
fn compare_names(a: &str, b: &str) -> Ordering {
  base_letters(a)
    .cmp(&base_letters(b))
    .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    .then_with(|| b.cmp(a))
}

fn base_letters(name: &str) -> String {
  name
    .nfd()
    .filter(|c| !is_combining_mark(*c))
    .flat_map(char::to_lowercase)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::{completion_percent, project, CategoryFilter, Query, SortMode};
  use crate::store::TaskStore;
  use crate::task::{Priority, Task};

  fn task(id: u64, name: &str, priority: Priority, category: &str) -> Task {
    Task::new(id, name, None, priority, category)
  }

  fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name()).collect()
  }

  fn sample() -> Vec<Task> {
    vec![
      task(1, "Write report", Priority::Low, "Work"),
      task(2, "buy milk", Priority::High, "Shopping"),
      task(3, "Call mom", Priority::Medium, "Personal"),
      task(4, "Buy bread", Priority::Low, "Shopping"),
    ]
  }

  #[test]
  fn default_query_passes_store_order() {
    let tasks = sample();
    let projection = project(&tasks, &Query::default());
    assert_eq!(projection.tasks, tasks);
  }

  #[test]
  fn search_is_case_insensitive() {
    let query = Query {
      search: "BUY".to_owned(),
      ..Query::default()
    };
    let projection = project(&sample(), &query);
    assert_eq!(names(&projection.tasks), vec!["buy milk", "Buy bread"]);
  }

  #[test]
  fn category_filter_is_exact() {
    let mut query = Query {
      category: CategoryFilter::from("Shopping"),
      ..Query::default()
    };
    assert_eq!(
      names(&project(&sample(), &query).tasks),
      vec!["buy milk", "Buy bread"]
    );

    query.category = CategoryFilter::from("shopping");
    assert!(project(&sample(), &query).tasks.is_empty());

    query.category = CategoryFilter::from("All");
    assert_eq!(project(&sample(), &query).tasks.len(), 4);
  }

  #[test]
  fn sort_by_priority_is_stable() {
    let tasks = vec![
      task(1, "low-1", Priority::Low, "Work"),
      task(2, "high", Priority::High, "Work"),
      task(3, "medium", Priority::Medium, "Work"),
      task(4, "low-2", Priority::Low, "Work"),
      task(5, "odd", Priority::Other("Urgent".to_owned()), "Work"),
      task(6, "high-2", Priority::High, "Work"),
    ];
    let query = Query {
      sort: Some(SortMode::Priority),
      ..Query::default()
    };

    assert_eq!(
      names(&project(&tasks, &query).tasks),
      vec!["high", "high-2", "medium", "low-1", "low-2", "odd"]
    );
  }

  #[test]
  fn sort_by_name_ignores_case() {
    let query = Query {
      sort: Some(SortMode::Name),
      ..Query::default()
    };
    assert_eq!(
      names(&project(&sample(), &query).tasks),
      vec!["Buy bread", "buy milk", "Call mom", "Write report"]
    );
  }

  #[test]
  fn sort_by_name_places_accented_letters_with_their_base() {
    let tasks = vec![
      task(1, "Faire", Priority::Low, "Work"),
      task(2, "zèbre", Priority::Low, "Work"),
      task(3, "Écrire", Priority::Low, "Work"),
      task(4, "eclair", Priority::Low, "Work"),
      task(5, "écrire", Priority::Low, "Work"),
      task(6, "ecrire", Priority::Low, "Work"),
    ];
    let query = Query {
      sort: Some(SortMode::Name),
      ..Query::default()
    };

    assert_eq!(
      names(&project(&tasks, &query).tasks),
      vec!["eclair", "ecrire", "écrire", "Écrire", "Faire", "zèbre"]
    );
  }

  #[test]
  fn sort_by_date_puts_missing_dates_first() {
    let tasks = vec![
      Task::new(1, "later", Some("2024-03-01".to_owned()), Priority::Low, "Work"),
      Task::new(2, "undated", None, Priority::Low, "Work"),
      Task::new(3, "sooner", Some("2024-01-15".to_owned()), Priority::Low, "Work"),
      Task::new(4, "undated-2", None, Priority::Low, "Work"),
    ];
    let query = Query {
      sort: Some(SortMode::Date),
      ..Query::default()
    };

    assert_eq!(
      names(&project(&tasks, &query).tasks),
      vec!["undated", "undated-2", "sooner", "later"]
    );
  }

  #[test]
  fn projection_is_idempotent() {
    let tasks = sample();
    let query = Query {
      search: "b".to_owned(),
      category: CategoryFilter::All,
      sort: Some(SortMode::Name),
    };

    let first = project(&tasks, &query);
    let second = project(&tasks, &query);
    assert_eq!(first, second);
    assert_eq!(
      serde_json::to_string(&first.tasks).unwrap(),
      serde_json::to_string(&second.tasks).unwrap()
    );
  }

  #[test]
  fn completion_percent_uses_whole_store() {
    assert_eq!(completion_percent(&[]), 0);

    let mut store = TaskStore::new();
    for name in ["a", "b", "c", "d"] {
      store.add(name, None, Priority::Low, "Work").unwrap();
    }
    let first_id = crate::traits::Indexable::id(&store.all()[0]);
    store.toggle_complete(first_id).unwrap();
    assert_eq!(completion_percent(store.all()), 25);

    let query = Query {
      search: "zzz".to_owned(),
      ..Query::default()
    };
    let projection = project(store.all(), &query);
    assert!(projection.tasks.is_empty());
    assert_eq!(projection.completion_percent, 25);
  }

  #[test]
  fn completion_percent_rounds() {
    let mut tasks = vec![
      task(1, "a", Priority::Low, "Work"),
      task(2, "b", Priority::Low, "Work"),
      task(3, "c", Priority::Low, "Work"),
    ];
    tasks[0].toggle();
    assert_eq!(completion_percent(&tasks), 33);
    tasks[1].toggle();
    assert_eq!(completion_percent(&tasks), 67);
  }
}
