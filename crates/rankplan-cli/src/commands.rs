//! Main commands enum.
//!
//! Entity subcommands live in `entity_commands`.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::entity_commands::{AssignmentCommand, MarkerCommand, PlanCommand, RankCommand};
use crate::utils::input::parse_date;

/// Available commands for the scheduling editor.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage ranks
    Rank {
        #[command(subcommand)]
        command: RankCommand,
    },

    /// Manage rank plans
    Plan {
        #[command(subcommand)]
        command: PlanCommand,
    },

    /// Manage assignments
    Assignment {
        #[command(subcommand)]
        command: AssignmentCommand,
    },

    /// Manage timeline markers
    Marker {
        #[command(subcommand)]
        command: MarkerCommand,
    },

    /// Print the chart: ranks, plan spans and assignment bars
    Chart {
        /// Emit the view model as JSON
        #[arg(long)]
        json: bool,
        /// Date standing in for "now" (spans of empty plans)
        #[arg(long, value_parser = parse_date)]
        at: Option<DateTime<Utc>>,
    },

    /// Delete every rank, plan, assignment and marker
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the resolved data directory and snapshot files
    Paths,
}
