//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for the rank plan scheduling editor.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "rankplan")]
#[command(about = "Edit rank plans, assignments and timeline markers")]
#[command(version)]
pub struct Cli {
    /// Directory holding the schedule snapshots
    #[arg(long = "data-dir", global = true, env = "RANKPLAN_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Prefix for every storage key, to keep several schedules side by side
    #[arg(long = "key-prefix", global = true, env = "RANKPLAN_KEY_PREFIX")]
    pub key_prefix: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
