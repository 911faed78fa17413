//! Assignment command handlers.

use anyhow::Result;
use chrono::{DateTime, Utc};
use tracing::warn;

use rankplan_core::{AssignmentForm, AssignmentId, AssignmentType, EntityId, RankPlanId};

use super::report_saved;
use crate::bootstrap::CliContext;
use crate::entity_commands::AssignmentCommand;
use crate::error::CliError;
use crate::presentation::{format_date, format_optional, print_separator, truncate_string};

/// Field changes requested by `assignment edit`. `None` keeps the value.
#[derive(Debug, Default)]
pub struct EditArgs {
    pub name: Option<String>,
    pub clear_name: bool,
    pub kind: Option<AssignmentType>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_end: Option<DateTime<Utc>>,
    pub clear_actual: bool,
    pub plan_id: Option<String>,
}

impl EditArgs {
    fn apply(self, form: &mut AssignmentForm) {
        if self.clear_name {
            form.name.clear();
        }
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(kind) = self.kind {
            form.kind = kind;
        }
        if self.start.is_some() {
            form.plan_start = self.start;
        }
        if self.end.is_some() {
            form.plan_end = self.end;
        }
        if self.clear_actual {
            form.actual_start = None;
            form.actual_end = None;
        }
        if self.actual_start.is_some() {
            form.actual_start = self.actual_start;
        }
        if self.actual_end.is_some() {
            form.actual_end = self.actual_end;
        }
        if let Some(plan_id) = self.plan_id {
            form.rank_plan_id = plan_id;
        }
    }
}

/// Execute an assignment subcommand.
pub fn execute(ctx: &mut CliContext, command: AssignmentCommand) -> Result<()> {
    match command {
        AssignmentCommand::Add {
            plan_id,
            start,
            end,
            name,
            kind,
            actual_start,
            actual_end,
        } => {
            warn_if_missing_plan(ctx, &plan_id);
            let form = AssignmentForm {
                name: name.unwrap_or_default(),
                kind,
                plan_start: Some(start),
                plan_end: Some(end),
                actual_start,
                actual_end,
                rank_plan_id: String::new(),
            };
            add(ctx, plan_id, form)
        }
        AssignmentCommand::Edit {
            id,
            name,
            clear_name,
            kind,
            start,
            end,
            actual_start,
            actual_end,
            clear_actual,
            plan_id,
        } => {
            let args = EditArgs {
                name,
                clear_name,
                kind,
                start,
                end,
                actual_start,
                actual_end,
                clear_actual,
                plan_id,
            };
            edit(ctx, &id, args)
        }
        AssignmentCommand::Move { id, start, end } => {
            if !ctx
                .editor_mut()
                .on_move(&AssignmentId::new(id.as_str()), start, end)
            {
                return Err(CliError::not_found("assignment", &id).into());
            }
            println!("Moved assignment {id}");
            Ok(())
        }
        AssignmentCommand::Delete { id } => {
            if !ctx
                .editor_mut()
                .delete_assignment(&AssignmentId::new(id.as_str()))
            {
                return Err(CliError::not_found("assignment", &id).into());
            }
            println!("Deleted assignment {id}");
            Ok(())
        }
        AssignmentCommand::List { plan_id } => {
            list(ctx, plan_id.as_deref());
            Ok(())
        }
    }
}

fn warn_if_missing_plan(ctx: &CliContext, plan_id: &str) {
    if ctx.store().rank_plan(&RankPlanId::new(plan_id)).is_none() {
        warn!(plan_id, "Saving assignment under unknown plan");
        eprintln!(
            "Warning: plan '{plan_id}' does not exist; the assignment will show without a plan."
        );
    }
}

fn add(ctx: &mut CliContext, plan_id: String, form: AssignmentForm) -> Result<()> {
    let editor = ctx.editor_mut();
    editor.assignment_session_mut().begin_create(Some(plan_id));
    let outcome = editor.save_assignment(form).map_err(CliError::from)?;
    report_saved("assignment", outcome)
}

/// Apply `args` on top of the assignment's committed values and save.
pub fn edit(ctx: &mut CliContext, id: &str, args: EditArgs) -> Result<()> {
    let assignment = ctx
        .store()
        .assignment(&AssignmentId::new(id))
        .cloned()
        .ok_or_else(|| CliError::not_found("assignment", id))?;
    if let Some(plan_id) = &args.plan_id {
        warn_if_missing_plan(ctx, plan_id);
    }

    let editor = ctx.editor_mut();
    editor.assignment_session_mut().begin_edit(assignment);
    let mut form = editor.assignment_session().form();
    args.apply(&mut form);
    let outcome = editor.save_assignment(form).map_err(CliError::from)?;
    report_saved("assignment", outcome)
}

fn list(ctx: &CliContext, plan_filter: Option<&str>) {
    let assignments: Vec<_> = ctx
        .store()
        .assignments()
        .iter()
        .filter(|a| plan_filter.is_none_or(|plan| a.rank_plan_id.as_str() == plan))
        .collect();

    if assignments.is_empty() {
        println!("No assignments found.");
        return;
    }

    println!(
        "{:<36}  {:<20} {:<9} {:<17} {:<17} {:<17} Plan",
        "ID", "Name", "Type", "Start", "End", "Actual start"
    );
    print_separator(160);
    for a in assignments {
        println!(
            "{:<36}  {:<20} {:<9} {:<17} {:<17} {:<17} {}",
            a.id,
            truncate_string(&format_optional(a.name.as_ref(), "--"), 20),
            a.kind,
            format_date(a.plan_start_date),
            format_date(a.plan_end_date),
            format_optional(a.actual_start_date.map(format_date).as_ref(), "--"),
            a.rank_plan_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use chrono::TimeZone;

    fn jan(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn add_one(ctx: &mut CliContext) -> String {
        execute(
            ctx,
            AssignmentCommand::Add {
                plan_id: "p1".to_string(),
                start: jan(1),
                end: jan(31),
                name: Some("Day".to_string()),
                kind: AssignmentType::Main,
                actual_start: Some(jan(2)),
                actual_end: None,
            },
        )
        .unwrap();
        ctx.store().assignments().last().unwrap().id.to_string()
    }

    #[test]
    fn test_add_uses_plan_as_parent() {
        let mut ctx = context();
        add_one(&mut ctx);

        let saved = &ctx.store().assignments()[0];
        assert_eq!(saved.rank_plan_id.as_str(), "p1");
        assert_eq!(saved.name.as_deref(), Some("Day"));
        assert_eq!(saved.actual_start_date, Some(jan(2)));
    }

    #[test]
    fn test_edit_keeps_unmentioned_fields() {
        let mut ctx = context();
        let id = add_one(&mut ctx);

        edit(
            &mut ctx,
            &id,
            EditArgs {
                kind: Some(AssignmentType::Reliever),
                clear_name: true,
                clear_actual: true,
                end: Some(jan(20)),
                ..Default::default()
            },
        )
        .unwrap();

        let saved = &ctx.store().assignments()[0];
        assert_eq!(saved.kind, AssignmentType::Reliever);
        assert_eq!(saved.name, None);
        assert_eq!(saved.actual_start_date, None);
        assert_eq!((saved.plan_start_date, saved.plan_end_date), (jan(1), jan(20)));
        assert_eq!(saved.rank_plan_id.as_str(), "p1");
    }

    #[test]
    fn test_move_and_delete() {
        let mut ctx = context();
        let id = add_one(&mut ctx);
        let other = add_one(&mut ctx);

        execute(
            &mut ctx,
            AssignmentCommand::Move {
                id: id.clone(),
                start: jan(10),
                end: None,
            },
        )
        .unwrap();
        let moved = ctx.store().assignment(&AssignmentId::new(id.as_str())).unwrap();
        assert_eq!((moved.plan_start_date, moved.plan_end_date), (jan(10), jan(31)));

        execute(&mut ctx, AssignmentCommand::Delete { id: id.clone() }).unwrap();
        let remaining: Vec<_> = ctx
            .store()
            .assignments()
            .iter()
            .map(|a| a.id.to_string())
            .collect();
        assert_eq!(remaining, [other]);

        let err = execute(&mut ctx, AssignmentCommand::Delete { id }).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NotFound(_))
        ));
    }
}
