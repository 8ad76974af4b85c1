//! Roster command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, open the store and drive the repository.
//! - Render the cached roster as plain text or JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use roster_core::{
    core_version, init_from_config, ConfigOverrides, Person, PersonRepository, RosterConfig,
    SqlitePersonStore,
};
use std::path::PathBuf;

/// Keeps a durable list of names.
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Durable list of names", long_about = None)]
struct Cli {
    /// Path to the roster database (overrides ROSTER_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Absolute directory for rolling log files (overrides ROSTER_LOG_DIR)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error (overrides ROSTER_LOG_LEVEL)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print every stored name in insertion order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Append a name
    Add { name: String },
    /// Print the core version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command == Command::Version {
        println!("roster_core version={}", core_version());
        return Ok(());
    }

    let config = RosterConfig::from_env(ConfigOverrides {
        db_path: cli.db,
        log_level: cli.log_level,
        log_dir: cli.log_dir,
    });
    init_from_config(&config).context("failed to initialize logging")?;

    let store = SqlitePersonStore::open(&config.db_path)
        .with_context(|| format!("failed to open roster at `{}`", config.db_path.display()))?;
    let repo = PersonRepository::new(store);
    let result = run(&repo, cli.command);
    repo.close();
    result
}

fn run(repo: &PersonRepository<SqlitePersonStore>, command: Command) -> Result<()> {
    repo.load().context("failed to load roster")?;

    match command {
        Command::List { json } => {
            let people = repo.snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(&people)?);
            } else {
                print!("{}", render_list(&people));
            }
        }
        Command::Add { name } => {
            let person = repo.add(&name).context("failed to add name")?;
            println!("added {} ({} total)", person.id, repo.cached_len());
        }
        Command::Version => {}
    }

    Ok(())
}

fn render_list(people: &[Person]) -> String {
    if people.is_empty() {
        return "(empty)\n".to_string();
    }
    people
        .iter()
        .enumerate()
        .map(|(index, person)| format!("{:>3}. {}\n", index + 1, person.name))
        .collect()
}
