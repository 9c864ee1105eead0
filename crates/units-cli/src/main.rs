//! units-tool CLI
//!
//! Inspects and cleans up the generated course data file.

mod cli;
mod commands;
mod error;
mod settings;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::EditOptions;
use error::{CliError, Result};
use settings::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `analyze --json` output stays parseable.
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| CliError::user(format!("failed to set tracing subscriber: {e}")))?;
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} units.js maintenance tools", "units".green().bold());
        println!();
        println!("Run {} for available commands.", "units --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let settings = Settings::resolve(&cwd, cli.file.as_deref())?;
    tracing::debug!(file = %settings.file.display(), key = %settings.key, "resolved settings");

    execute_command(command, &settings)
}

fn execute_command(cmd: Commands, settings: &Settings) -> Result<()> {
    match cmd {
        Commands::Analyze { json } => commands::run_analyze(settings, json),
        Commands::StripProps { dry_run, diff } => {
            commands::run_strip_props(settings, EditOptions { dry_run, diff })
        }
        Commands::StripQuizzes { dry_run, diff } => {
            commands::run_strip_quizzes(settings, EditOptions { dry_run, diff })
        }
    }
}
