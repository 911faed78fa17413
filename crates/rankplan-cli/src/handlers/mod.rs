//! Command handlers that delegate to the core `Editor`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &mut CliContext, command) -> Result<()>`
//! - Thin wrappers that:
//!   1. Look up the entity an edit refers to
//!   2. Open the matching edit session and fill its form
//!   3. Save through the editor and format output for the terminal
//!
//! Handlers should NOT:
//! - Touch the storage backend directly
//! - Contain domain logic (grouping, spans, validation)

pub mod assignment;
pub mod chart;
pub mod clear;
pub mod marker;
pub mod paths;
pub mod plan;
pub mod rank;

use anyhow::Result;
use rankplan_core::SaveOutcome;

use crate::error::CliError;

/// Print the result of a dialog save.
fn report_saved(kind: &str, outcome: SaveOutcome) -> Result<()> {
    match outcome {
        SaveOutcome::Created(id) => println!("Created {kind} {id}"),
        SaveOutcome::Updated { id, found: true } => println!("Updated {kind} {id}"),
        SaveOutcome::Updated { id, found: false } => {
            return Err(CliError::not_found(kind, &id).into());
        }
    }
    Ok(())
}
