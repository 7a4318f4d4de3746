use log::debug;

use tasklist::{
  command::Command,
  config::Config,
  task::{normalize_due_date, Priority, TaskId},
  theme::Theme,
  view::{CategoryFilter, Query, SortMode, ALL_CATEGORIES},
  viewer::Viewer,
  Tasklist,
};

fn build_cli(config: &Config) -> clap::Command {
  let categories: Vec<&str> = config.categories.iter().map(|c| c.as_str()).collect();
  let mut filter_categories = vec![ALL_CATEGORIES];
  filter_categories.extend(categories.iter());

  let id_arg = || {
    clap::Arg::new("id")
      .required(true)
      .index(1)
      .value_parser(clap::value_parser!(TaskId))
  };

  clap::Command::new("tasklist")
    .about("Keep a to-do list in the terminal")
    .arg_required_else_help(true)
    .subcommand(
      clap::Command::new("add").about("Add a new task").args(&[
        clap::Arg::new("name")
          .required(true)
          .index(1)
          .multiple_values(true),
        clap::Arg::new("due")
          .long("due")
          .takes_value(true)
          .value_name("YYYY-MM-DD")
          .value_parser(normalize_due_date),
        clap::Arg::new("priority")
          .long("priority")
          .short('p')
          .takes_value(true)
          .ignore_case(true)
          .possible_values(Priority::KNOWN)
          .default_value(config.default_priority.as_str()),
        clap::Arg::new("category")
          .long("category")
          .short('c')
          .takes_value(true)
          .possible_values(categories.clone())
          .default_value(config.default_category()),
      ]),
    )
    .subcommand(
      clap::Command::new("toggle")
        .about("Mark a task as done or not done")
        .arg(id_arg()),
    )
    .subcommand(
      clap::Command::new("edit").about("Rename a task").args(&[
        id_arg(),
        clap::Arg::new("name").index(2).multiple_values(true),
      ]),
    )
    .subcommand(clap::Command::new("rm").about("Delete a task").arg(id_arg()))
    .subcommand(clap::Command::new("clear-completed").about("Delete every completed task"))
    .subcommand(clap::Command::new("list").about("Show tasks").args(&[
      clap::Arg::new("search")
        .long("search")
        .short('s')
        .takes_value(true),
      clap::Arg::new("category")
        .long("category")
        .short('c')
        .takes_value(true)
        .possible_values(filter_categories),
      clap::Arg::new("sort")
        .long("sort")
        .takes_value(true)
        .possible_values(SortMode::VARIANTS),
    ]))
    .subcommand(
      clap::Command::new("theme")
        .about("Switch between light and dark mode, toggles without an argument")
        .arg(
          clap::Arg::new("theme")
            .index(1)
            .possible_values(["light", "dark"]),
        ),
    )
    .subcommand(
      clap::Command::new("completions")
        .about("Print shell completions")
        .arg(
          clap::Arg::new("shell")
            .required(true)
            .index(1)
            .possible_values(["bash", "zsh", "fish", "elvish", "powershell"]),
        ),
    )
}

fn main() {
  env_logger::init();

  let config = match Config::load() {
    Ok(config) => config,
    Err(err) => {
      eprintln!("couldn't load config: {}", err);
      std::process::exit(1);
    }
  };

  let mut cli = build_cli(&config);
  let matches = cli.clone().get_matches();

  if let Some(("completions", subcommand_matches)) = matches.subcommand() {
    let shell = subcommand_matches.value_of("shell").unwrap_or_default();
    match shell.parse::<clap_complete::Shell>() {
      Ok(shell) => clap_complete::generate(shell, &mut cli, "tasklist", &mut std::io::stdout()),
      Err(err) => eprintln!("unknown shell {}: {}", shell, err),
    }
    return;
  }

  let mut tasklist = Tasklist::new(&config);

  match matches.subcommand() {
    Some(("list", subcommand_matches)) => {
      let query = Query {
        search: subcommand_matches
          .value_of("search")
          .unwrap_or_default()
          .to_owned(),
        category: subcommand_matches
          .value_of("category")
          .map(CategoryFilter::from)
          .unwrap_or_default(),
        sort: subcommand_matches
          .value_of("sort")
          .and_then(|sort| sort.parse().ok()),
      };
      debug!("list query: {:?}", query);

      let viewer = Viewer::new(tasklist.theme());
      viewer.print_projection(&tasklist.projection(&query));
    }

    Some((subcommand, subcommand_matches)) => {
      let command = match parse_command(subcommand, subcommand_matches, &config) {
        Some(command) => command,
        None => {
          println!("unknown subcommand {}", subcommand);
          return;
        }
      };

      let notification = tasklist.dispatch(command);
      let viewer = Viewer::new(tasklist.theme());
      viewer.print_notification(&notification);
      viewer.print_projection(&tasklist.projection(&Query::default()));
    }

    None => println!("subcommand not found"),
  };
}

fn parse_command(
  subcommand: &str,
  subcommand_matches: &clap::ArgMatches,
  config: &Config,
) -> Option<Command> {
  let id = || subcommand_matches.get_one::<TaskId>("id").copied();
  let joined_name = || {
    subcommand_matches
      .values_of("name")
      .map(|words| words.collect::<Vec<&str>>().join(" "))
      .unwrap_or_default()
  };

  match subcommand {
    "add" => Some(Command::Add {
      name: joined_name(),
      due_date: subcommand_matches.get_one::<String>("due").cloned(),
      priority: subcommand_matches
        .value_of("priority")
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(|| config.default_priority.clone()),
      category: subcommand_matches
        .value_of("category")
        .unwrap_or(config.default_category())
        .to_owned(),
    }),
    "toggle" => id().map(Command::Toggle),
    "edit" => id().map(|id| Command::Rename(id, joined_name())),
    "rm" => id().map(Command::Remove),
    "clear-completed" => Some(Command::RemoveCompleted),
    "theme" => match subcommand_matches.value_of("theme") {
      Some(theme) => theme.parse::<Theme>().ok().map(Command::SetTheme),
      None => Some(Command::ToggleTheme),
    },
    _ => None,
  }
}
