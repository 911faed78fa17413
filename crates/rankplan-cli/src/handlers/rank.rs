//! Rank command handlers.

use anyhow::Result;

use rankplan_core::{RankForm, RankId};

use super::report_saved;
use crate::bootstrap::CliContext;
use crate::entity_commands::RankCommand;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Execute a rank subcommand.
pub fn execute(ctx: &mut CliContext, command: RankCommand) -> Result<()> {
    match command {
        RankCommand::Add { name } => add(ctx, name),
        RankCommand::Edit { id, name } => edit(ctx, &id, name),
        RankCommand::List => {
            list(ctx);
            Ok(())
        }
    }
}

fn add(ctx: &mut CliContext, name: String) -> Result<()> {
    let editor = ctx.editor_mut();
    editor.rank_session_mut().begin_create(None);
    let outcome = editor.save_rank(RankForm { name }).map_err(CliError::from)?;
    report_saved("rank", outcome)
}

fn edit(ctx: &mut CliContext, id: &str, name: String) -> Result<()> {
    let rank = ctx
        .store()
        .rank(&RankId::new(id))
        .cloned()
        .ok_or_else(|| CliError::not_found("rank", id))?;

    let editor = ctx.editor_mut();
    editor.rank_session_mut().begin_edit(rank);
    let mut form = editor.rank_session().form();
    form.name = name;
    let outcome = editor.save_rank(form).map_err(CliError::from)?;
    report_saved("rank", outcome)
}

fn list(ctx: &CliContext) {
    let store = ctx.store();
    if store.ranks().is_empty() {
        println!("No ranks yet.");
        println!("Use 'rankplan rank add <name>' to add one.");
        return;
    }

    println!("{:<36}  {:<30} Plans", "ID", "Name");
    print_separator(76);
    for rank in store.ranks() {
        let plans = store
            .rank_plans()
            .iter()
            .filter(|plan| plan.rank_id == rank.id)
            .count();
        println!(
            "{:<36}  {:<30} {plans}",
            rank.id,
            truncate_string(&rank.name, 30)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;

    #[test]
    fn test_add_then_rename() {
        let mut ctx = context();
        execute(
            &mut ctx,
            RankCommand::Add {
                name: "Officer".to_string(),
            },
        )
        .unwrap();
        let id = ctx.store().ranks()[0].id.to_string();

        execute(
            &mut ctx,
            RankCommand::Edit {
                id,
                name: "Captain".to_string(),
            },
        )
        .unwrap();

        assert_eq!(ctx.store().ranks()[0].name, "Captain");
        assert!(ctx.editor().rank_session().is_idle());
    }

    #[test]
    fn test_blank_name_is_an_argument_error() {
        let mut ctx = context();
        let err = execute(
            &mut ctx,
            RankCommand::Add {
                name: " ".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
        assert!(ctx.store().ranks().is_empty());
    }

    #[test]
    fn test_edit_unknown_rank() {
        let mut ctx = context();
        let err = execute(
            &mut ctx,
            RankCommand::Edit {
                id: "missing".to_string(),
                name: "X".to_string(),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }
}
