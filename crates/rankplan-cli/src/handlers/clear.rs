//! Clear command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::utils::input::prompt_confirmation;

/// Wipe every collection after confirmation.
///
/// `yes` skips the prompt.
pub fn execute(ctx: &mut CliContext, yes: bool) -> Result<()> {
    let confirmed =
        yes || prompt_confirmation("Delete all ranks, plans, assignments and markers?")?;
    if ctx.editor_mut().clear_all(confirmed) {
        println!("All schedule data deleted.");
    } else {
        println!("Cancelled.");
    }
    Ok(())
}
