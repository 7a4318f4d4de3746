use std::fmt::Display;

use colored::{Color, ColoredString, Colorize};

use crate::{
  command::{AlertLevel, Notification},
  task::{Priority, Task},
  theme::Theme,
  traits::Indexable,
  view::Projection,
};

#[derive(Clone, Copy)]
struct Padding(usize);
impl Padding {
  pub fn string(self) -> String {
    " ".repeat(self.0)
  }
}

impl Display for Padding {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.string())
  }
}

struct ViewPaddings {}
impl ViewPaddings {
  pub const PAD: Padding = Padding(2);
  // Millisecond timestamp ids, `1700000000000`.
  pub const ID_WIDTH: usize = 13;
  pub const PROGRESS_WIDTH: usize = 20;
}

/// Colors of one visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  id: Color,
  text: Color,
  due_date: Color,
  category: Color,
  high: Color,
  medium: Color,
  low: Color,
  unknown_priority: Color,
  progress: Color,
  success: Color,
  warning: Color,
  info: Color,
  danger: Color,
}

impl Palette {
  pub const LIGHT: Palette = Palette {
    id: Color::BrightBlack,
    text: Color::Black,
    due_date: Color::Blue,
    category: Color::Cyan,
    high: Color::Red,
    medium: Color::Yellow,
    low: Color::Green,
    unknown_priority: Color::BrightBlack,
    progress: Color::Blue,
    success: Color::Green,
    warning: Color::Yellow,
    info: Color::Cyan,
    danger: Color::Red,
  };

  pub const DARK: Palette = Palette {
    id: Color::BrightBlack,
    text: Color::BrightWhite,
    due_date: Color::BrightBlue,
    category: Color::BrightCyan,
    high: Color::BrightRed,
    medium: Color::BrightYellow,
    low: Color::BrightGreen,
    unknown_priority: Color::White,
    progress: Color::BrightMagenta,
    success: Color::BrightGreen,
    warning: Color::BrightYellow,
    info: Color::BrightCyan,
    danger: Color::BrightRed,
  };

  pub fn for_theme(theme: Theme) -> Self {
    match theme {
      Theme::Light => Self::LIGHT,
      Theme::Dark => Self::DARK,
    }
  }

  fn priority(&self, priority: &Priority) -> Color {
    match priority {
      Priority::High => self.high,
      Priority::Medium => self.medium,
      Priority::Low => self.low,
      Priority::Other(_) => self.unknown_priority,
    }
  }

  fn alert(&self, level: AlertLevel) -> Color {
    match level {
      AlertLevel::Success => self.success,
      AlertLevel::Warning => self.warning,
      AlertLevel::Info => self.info,
      AlertLevel::Danger => self.danger,
    }
  }
}

pub struct Viewer {
  palette: Palette,
}

impl Viewer {
  pub fn new(theme: Theme) -> Self {
    Self {
      palette: Palette::for_theme(theme),
    }
  }

  pub fn print_notification(&self, notification: &Notification) {
    println!("{}", self.format_notification(notification));
  }

  pub fn print_projection(&self, projection: &Projection) {
    if projection.tasks.is_empty() {
      println!("no tasks to show");
    }
    for task in projection.tasks.iter() {
      println!("{}", self.format_task(task));
    }
    println!();
    println!("{}", self.format_progress(projection.completion_percent));
  }

  pub fn format_notification(&self, notification: &Notification) -> String {
    let label = match notification.level {
      AlertLevel::Success => "success",
      AlertLevel::Warning => "warning",
      AlertLevel::Info => "info",
      AlertLevel::Danger => "danger",
    };
    format!(
      "{label}: {message}",
      label = label.color(self.palette.alert(notification.level)).bold(),
      message = notification.message
    )
  }

  pub fn format_task(&self, task: &Task) -> String {
    let mut name = task.name().color(self.palette.text);
    if task.is_completed() {
      name = name.strikethrough().dimmed();
    }

    let mut badges: Vec<ColoredString> = Vec::new();
    if let Some(due_date) = task.due_date() {
      badges.push(format!("[due {}]", due_date).color(self.palette.due_date));
    }
    badges.push(
      format!("[{}]", task.priority())
        .color(self.palette.priority(task.priority()))
        .bold(),
    );
    badges.push(format!("[{}]", task.category()).color(self.palette.category));

    let badges: Vec<String> = badges.iter().map(|b| b.to_string()).collect();

    format!(
      "{pad}{id}{pad}{mark} {name}{pad}{badges}",
      pad = ViewPaddings::PAD,
      id = format!("{:>width$}", task.id(), width = ViewPaddings::ID_WIDTH).color(self.palette.id),
      mark = match task.is_completed() {
        true => "[x]",
        false => "[ ]",
      },
      name = name,
      badges = badges.join(" ")
    )
  }

  /// Bar width and label both follow the store-wide completion percentage.
  pub fn format_progress(&self, percent: u8) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * ViewPaddings::PROGRESS_WIDTH + 50) / 100;
    format!(
      "{pad}[{filled}{empty}] {percent}%",
      pad = ViewPaddings::PAD,
      filled = "#".repeat(filled).color(self.palette.progress),
      empty = " ".repeat(ViewPaddings::PROGRESS_WIDTH - filled),
      percent = percent
    )
  }
}
