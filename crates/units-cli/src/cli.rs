//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and clean up the generated course data file (data/units.js)
#[derive(Parser, Debug)]
#[command(name = "units")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Target file (defaults to data/units.js, or `file` in units-tool.toml)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Report on every quizzes array without changing the file
    ///
    /// Examples:
    ///   units analyze           # Human-readable summary
    ///   units analyze --json    # Same report as JSON
    Analyze {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Remove deprecated single-line properties
    ///
    /// Drops lines that are exactly `completed: false,`,
    /// `completionDate: null` or `current: false`.
    StripProps {
        /// Report what would be removed without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff of the change
        #[arg(long)]
        diff: bool,
    },

    /// Remove every quizzes array, empty or populated
    StripQuizzes {
        /// Report what would be removed without writing the file
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff of the change
        #[arg(long)]
        diff: bool,
    },
}
