//! Rank plan command handlers.

use anyhow::Result;
use tracing::warn;

use rankplan_core::{EntityId, RankId, RankPlanForm, RankPlanId};

use super::report_saved;
use crate::bootstrap::CliContext;
use crate::entity_commands::PlanCommand;
use crate::error::CliError;
use crate::presentation::{print_separator, truncate_string};

/// Execute a plan subcommand.
pub fn execute(ctx: &mut CliContext, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Add { rank_id, name } => add(ctx, rank_id, name),
        PlanCommand::Edit { id, name, rank_id } => edit(ctx, &id, name, rank_id),
        PlanCommand::List { rank_id } => {
            list(ctx, rank_id.as_deref());
            Ok(())
        }
    }
}

fn warn_if_missing_rank(ctx: &CliContext, rank_id: &str) {
    if ctx.store().rank(&RankId::new(rank_id)).is_none() {
        warn!(rank_id, "Saving plan under unknown rank");
        eprintln!("Warning: rank '{rank_id}' does not exist; the plan will show without a rank.");
    }
}

fn add(ctx: &mut CliContext, rank_id: String, name: String) -> Result<()> {
    warn_if_missing_rank(ctx, &rank_id);

    let editor = ctx.editor_mut();
    editor.rank_plan_session_mut().begin_create(Some(rank_id));
    let outcome = editor
        .save_rank_plan(RankPlanForm {
            name,
            ..Default::default()
        })
        .map_err(CliError::from)?;
    report_saved("plan", outcome)
}

fn edit(
    ctx: &mut CliContext,
    id: &str,
    name: Option<String>,
    rank_id: Option<String>,
) -> Result<()> {
    let plan = ctx
        .store()
        .rank_plan(&RankPlanId::new(id))
        .cloned()
        .ok_or_else(|| CliError::not_found("plan", id))?;
    if let Some(rank_id) = &rank_id {
        warn_if_missing_rank(ctx, rank_id);
    }

    let editor = ctx.editor_mut();
    editor.rank_plan_session_mut().begin_edit(plan);
    let mut form = editor.rank_plan_session().form();
    if let Some(name) = name {
        form.name = name;
    }
    if let Some(rank_id) = rank_id {
        form.rank_id = rank_id;
    }
    let outcome = editor.save_rank_plan(form).map_err(CliError::from)?;
    report_saved("plan", outcome)
}

fn list(ctx: &CliContext, rank_filter: Option<&str>) {
    let store = ctx.store();
    let plans: Vec<_> = store
        .rank_plans()
        .iter()
        .filter(|plan| rank_filter.is_none_or(|rank| plan.rank_id.as_str() == rank))
        .collect();

    if plans.is_empty() {
        println!("No plans found.");
        return;
    }

    println!("{:<36}  {:<24} {:<36}  Assignments", "ID", "Name", "Rank");
    print_separator(112);
    for plan in plans {
        let rank = store
            .rank(&plan.rank_id)
            .map_or_else(|| format!("{} (missing)", plan.rank_id), |r| r.name.clone());
        let assignments = store
            .assignments()
            .iter()
            .filter(|a| a.rank_plan_id == plan.id)
            .count();
        println!(
            "{:<36}  {:<24} {:<36}  {assignments}",
            plan.id,
            truncate_string(&plan.name, 24),
            truncate_string(&rank, 36)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity_commands::RankCommand;
    use crate::handlers::{rank, test_support::context};

    #[test]
    fn test_add_binds_rank_and_edit_moves_plan() {
        let mut ctx = context();
        rank::execute(
            &mut ctx,
            RankCommand::Add {
                name: "Officer".to_string(),
            },
        )
        .unwrap();
        let officer = ctx.store().ranks()[0].id.to_string();

        execute(
            &mut ctx,
            PlanCommand::Add {
                rank_id: officer.clone(),
                name: "2024 Plan".to_string(),
            },
        )
        .unwrap();
        let plan = ctx.store().rank_plans()[0].clone();
        assert_eq!(plan.rank_id.as_str(), officer);

        execute(
            &mut ctx,
            PlanCommand::Edit {
                id: plan.id.to_string(),
                name: None,
                rank_id: Some("elsewhere".to_string()),
            },
        )
        .unwrap();

        let edited = &ctx.store().rank_plans()[0];
        assert_eq!(edited.name, "2024 Plan");
        assert_eq!(edited.rank_id.as_str(), "elsewhere");
    }

    #[test]
    fn test_orphan_plan_is_accepted() {
        let mut ctx = context();
        execute(
            &mut ctx,
            PlanCommand::Add {
                rank_id: "no-such-rank".to_string(),
                name: "Stray".to_string(),
            },
        )
        .unwrap();

        assert_eq!(ctx.store().rank_plans().len(), 1);
    }
}
