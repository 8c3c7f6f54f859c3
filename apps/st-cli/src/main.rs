//! # st-cli
//!
//! Command-line interface for the study tracker.
//!
//! With no subcommand, runs the interactive menu:
//! add a goal, log a study session, view progress, delete a goal, exit.
//! The same operations are available one-shot:
//! - `study-tracker add <title> --weekly <h> --weeks <n>`
//! - `study-tracker log <title> <hours>`
//! - `study-tracker view`
//! - `study-tracker delete <title>`

mod commands;
mod config;
mod prompt;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::goal::GoalCommands;
use crate::commands::Tracker;
use crate::config::TrackerConfig;
use crate::prompt::TerminalPrompt;

/// Study tracker — weekly study-hour goals and logged sessions.
#[derive(Parser)]
#[command(name = "study-tracker", version, about)]
struct Cli {
    /// Base directory for the data file and study-tracker.toml (defaults to current directory).
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Config file to use instead of <root>/study-tracker.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Goal data file (overrides the config).
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Goal(GoalCommands),
    /// Run the interactive menu (the default).
    Menu,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with menu output on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let root = cli.root.canonicalize().unwrap_or(cli.root);

    let mut config = TrackerConfig::discover(&root, cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if cli.no_color || !std::io::stdout().is_terminal() {
        config.display.color = false;
    }
    tracing::debug!(data_file = %config.data_file.display(), "using data file");

    let tracker = Tracker::from_config(&config);
    let mut prompt = TerminalPrompt::stdio(config.display.color);

    let data_file = config.data_file.display();
    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Goal(command) => commands::goal::execute(&command, &tracker, &mut prompt),
        Commands::Menu => commands::menu::run(&tracker, &mut prompt),
    }
    .with_context(|| format!("study tracker failed (data file: {})", data_file))
}
