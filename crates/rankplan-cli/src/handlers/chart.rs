//! Chart command handler.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::bootstrap::CliContext;
use crate::presentation::render_chart;

/// Print the projected chart, as an outline or as JSON.
///
/// `at` stands in for the current time, which only matters for plans with
/// no assignments.
pub fn execute(ctx: &CliContext, json: bool, at: Option<DateTime<Utc>>) -> Result<()> {
    let view = ctx.editor().chart(at.unwrap_or_else(Utc::now));
    if json {
        let text = serde_json::to_string_pretty(&view).context("Failed to serialize chart")?;
        println!("{text}");
    } else {
        println!("{}", render_chart(&view));
    }
    Ok(())
}
