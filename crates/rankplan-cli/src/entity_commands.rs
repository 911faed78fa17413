//! Per-entity subcommands.

use chrono::{DateTime, Utc};
use clap::Subcommand;

use rankplan_core::AssignmentType;

use crate::utils::input::{parse_assignment_type, parse_date};

/// Rank subcommands.
#[derive(Subcommand, Debug)]
pub enum RankCommand {
    /// Add a rank
    Add {
        /// Display name, e.g. "Officer"
        name: String,
    },
    /// Rename a rank
    Edit {
        /// Rank ID
        id: String,
        /// New name
        #[arg(long)]
        name: String,
    },
    /// List ranks
    List,
}

/// Rank plan subcommands.
#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Add a plan under a rank
    Add {
        /// Owning rank ID
        rank_id: String,
        /// Display name, e.g. "2024 Plan"
        name: String,
    },
    /// Change a plan's name or rank
    Edit {
        /// Plan ID
        id: String,
        #[arg(long)]
        name: Option<String>,
        /// Move the plan under another rank
        #[arg(long = "rank")]
        rank_id: Option<String>,
    },
    /// List plans
    List {
        /// Only plans of this rank
        #[arg(long = "rank")]
        rank_id: Option<String>,
    },
}

/// Assignment subcommands.
#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    /// Add an assignment under a plan
    Add {
        /// Owning rank plan ID
        plan_id: String,
        /// Planned start (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        start: DateTime<Utc>,
        /// Planned end (YYYY-MM-DD or RFC 3339)
        #[arg(long, value_parser = parse_date)]
        end: DateTime<Utc>,
        #[arg(long)]
        name: Option<String>,
        /// "main" or "reliever"
        #[arg(long = "type", value_parser = parse_assignment_type, default_value = "main")]
        kind: AssignmentType,
        #[arg(long, value_parser = parse_date)]
        actual_start: Option<DateTime<Utc>>,
        #[arg(long, value_parser = parse_date)]
        actual_end: Option<DateTime<Utc>>,
    },
    /// Edit an assignment; omitted fields keep their value
    Edit {
        /// Assignment ID
        id: String,
        #[arg(long, conflicts_with = "clear_name")]
        name: Option<String>,
        /// Remove the name
        #[arg(long)]
        clear_name: bool,
        #[arg(long = "type", value_parser = parse_assignment_type)]
        kind: Option<AssignmentType>,
        #[arg(long, value_parser = parse_date)]
        start: Option<DateTime<Utc>>,
        #[arg(long, value_parser = parse_date)]
        end: Option<DateTime<Utc>>,
        #[arg(long, value_parser = parse_date)]
        actual_start: Option<DateTime<Utc>>,
        #[arg(long, value_parser = parse_date)]
        actual_end: Option<DateTime<Utc>>,
        /// Remove both actual dates
        #[arg(long, conflicts_with_all = ["actual_start", "actual_end"])]
        clear_actual: bool,
        /// Move under another rank plan
        #[arg(long = "plan")]
        plan_id: Option<String>,
    },
    /// Move an assignment on the timeline
    Move {
        /// Assignment ID
        id: String,
        /// New planned start
        #[arg(value_parser = parse_date)]
        start: DateTime<Utc>,
        /// New planned end; unchanged when omitted
        #[arg(value_parser = parse_date)]
        end: Option<DateTime<Utc>>,
    },
    /// Delete an assignment
    Delete {
        /// Assignment ID
        id: String,
    },
    /// List assignments
    List {
        /// Only assignments of this plan
        #[arg(long = "plan")]
        plan_id: Option<String>,
    },
}

/// Marker subcommands.
#[derive(Subcommand, Debug)]
pub enum MarkerCommand {
    /// Place a marker on the timeline
    Add {
        #[arg(value_parser = parse_date)]
        date: DateTime<Utc>,
        label: String,
    },
    /// Remove a marker
    Remove {
        /// Marker ID
        id: String,
    },
    /// List markers
    List,
}
