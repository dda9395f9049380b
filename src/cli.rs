//! CLI argument parsing for xochitl-tools
//!
//! Global flags (`--format`, `--quiet`, `--verbose`, logging controls) apply
//! to every subcommand; store selection is per-subcommand via `--folder`.
//! The long flag spellings match the original tools.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for the CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// xochitl-tools - utilities for the reMarkable document metadata store
#[derive(Parser, Debug)]
#[command(name = "xochitl-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log filter (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a notebook by name and print its identity and folder path
    Find(FindArgs),

    /// Permanently remove soft-deleted items from the store
    Purge(PurgeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// The name of the notebook to find
    #[arg(long = "notebook_name", short = 'n')]
    pub notebook_name: String,

    /// The folder to search in (default: the on-device xochitl store)
    #[arg(long, short)]
    pub folder: Option<PathBuf>,

    /// Search deleted notebooks as well
    #[arg(long, short)]
    pub deleted: bool,

    /// Require an exact notebook name match
    #[arg(long, short)]
    pub exact: bool,

    /// Print additional information about each notebook
    #[arg(long = "extra", short = 'x')]
    pub extra: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PurgeArgs {
    /// The folder to search in (default: the on-device xochitl store)
    #[arg(long, short)]
    pub folder: Option<PathBuf>,

    /// Don't ask for confirmation, just delete everything
    #[arg(short = 'y')]
    pub yes: bool,

    /// Also remove content, pagedata and thumbnail sidecars sharing the id
    #[arg(long)]
    pub all_sidecars: bool,
}

// Implement ValueEnum for OutputFormat to work with clap
impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[OutputFormat::Human, OutputFormat::Json]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            OutputFormat::Human => Some(clap::builder::PossibleValue::new("human")),
            OutputFormat::Json => Some(clap::builder::PossibleValue::new("json")),
        }
    }
}
