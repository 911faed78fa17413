//! Marker command handlers.

use anyhow::Result;

use rankplan_core::MarkerId;

use crate::bootstrap::CliContext;
use crate::entity_commands::MarkerCommand;
use crate::error::CliError;
use crate::presentation::{format_date, format_optional, print_separator};

/// Execute a marker subcommand.
pub fn execute(ctx: &mut CliContext, command: MarkerCommand) -> Result<()> {
    match command {
        MarkerCommand::Add { date, label } => {
            let id = ctx
                .editor_mut()
                .on_create_marker(date, &label)
                .ok_or_else(|| CliError::Arguments("marker label cannot be empty".to_string()))?;
            println!("Created marker {id}");
            Ok(())
        }
        MarkerCommand::Remove { id } => {
            if !ctx.editor_mut().on_remove_marker(&MarkerId::new(id.as_str())) {
                return Err(CliError::not_found("marker", &id).into());
            }
            println!("Removed marker {id}");
            Ok(())
        }
        MarkerCommand::List => {
            list(ctx);
            Ok(())
        }
    }
}

fn list(ctx: &CliContext) {
    let markers = ctx.store().markers();
    if markers.is_empty() {
        println!("No markers placed.");
        return;
    }

    println!("{:<36}  {:<17} {:<30} Class", "ID", "Date", "Label");
    print_separator(96);
    for marker in markers {
        println!(
            "{:<36}  {:<17} {:<30} {}",
            marker.id,
            format_date(marker.date),
            marker.label,
            format_optional(marker.class_name.as_ref(), "--")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::context;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_add_and_remove_marker() {
        let mut ctx = context();
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        execute(
            &mut ctx,
            MarkerCommand::Add {
                date,
                label: "Audit".to_string(),
            },
        )
        .unwrap();
        let id = ctx.store().markers()[0].id.to_string();
        assert_eq!(ctx.store().markers()[0].date, date);

        execute(&mut ctx, MarkerCommand::Remove { id }).unwrap();
        assert!(ctx.store().markers().is_empty());
    }

    #[test]
    fn test_blank_label_is_rejected() {
        let mut ctx = context();
        let err = execute(
            &mut ctx,
            MarkerCommand::Add {
                date: Utc::now(),
                label: String::new(),
            },
        )
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::Arguments(_))
        ));
        assert!(ctx.store().markers().is_empty());
    }
}
