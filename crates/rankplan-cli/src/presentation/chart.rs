//! Text rendering of the chart view model.

use rankplan_core::{ChartView, Feature, PlanRow};

use super::tables::format_date;

fn range(feature: &Feature) -> String {
    format!(
        "{} .. {}",
        format_date(feature.start_at),
        format_date(feature.end_at)
    )
}

fn bar_line(feature: &Feature, indent: &str) -> String {
    format!(
        "{indent}- {:<24} {:<26} {:<9} {}",
        feature.name,
        range(feature),
        feature.status.name,
        feature.id
    )
}

fn plan_lines(row: &PlanRow<'_>, indent: &str, lines: &mut Vec<String>) {
    let span = if row.assignments.is_empty() {
        "(no assignments)".to_string()
    } else {
        range(&row.feature)
    };
    lines.push(format!(
        "{indent}{} [{}]  {span}",
        row.plan.name, row.plan.id
    ));
    let bar_indent = format!("{indent}  ");
    lines.extend(row.assignments.iter().map(|bar| bar_line(bar, &bar_indent)));
}

/// Render `view` as an indented outline: ranks, their plans with spans,
/// then assignment bars, followed by orphans and markers.
pub fn render_chart(view: &ChartView<'_>) -> String {
    let mut lines = Vec::new();

    for group in &view.ranks {
        lines.push(format!("{} [{}]", group.rank.name, group.rank.id));
        if group.plans.is_empty() {
            lines.push("  (no plans)".to_string());
        }
        for row in &group.plans {
            plan_lines(row, "  ", &mut lines);
        }
    }

    if !view.orphan_plans.is_empty() {
        lines.push("Plans without a rank".to_string());
        for row in &view.orphan_plans {
            plan_lines(row, "  ", &mut lines);
        }
    }

    if !view.orphan_assignments.is_empty() {
        lines.push("Assignments without a plan".to_string());
        lines.extend(view.orphan_assignments.iter().map(|bar| bar_line(bar, "  ")));
    }

    if !view.markers.is_empty() {
        lines.push("Markers".to_string());
        lines.extend(view.markers.iter().map(|marker| {
            format!(
                "  {} {:<24} {}",
                format_date(marker.date),
                marker.label,
                marker.id
            )
        }));
    }

    if lines.is_empty() {
        return "Nothing scheduled yet.".to_string();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rankplan_core::{
        AssignmentType, NewAssignment, NewMarker, NewRank, NewRankPlan, RankId, project,
    };
    use rankplan_storage::StorageFactory;

    #[test]
    fn test_empty_chart() {
        let store = StorageFactory::memory_store();
        let view = project(&store, Utc::now());
        assert_eq!(render_chart(&view), "Nothing scheduled yet.");
    }

    #[test]
    fn test_outline_lists_rank_plan_and_bars() {
        let mut store = StorageFactory::memory_store();
        let rank = store.create_rank(NewRank {
            name: "Officer".to_string(),
        });
        let plan = store.create_rank_plan(NewRankPlan {
            name: "2024 Plan".to_string(),
            rank_id: rank,
        });
        store.create_assignment(NewAssignment {
            name: None,
            kind: AssignmentType::Reliever,
            plan_start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            plan_end_date: Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
            actual_start_date: None,
            actual_end_date: None,
            rank_plan_id: plan,
        });
        store.create_rank_plan(NewRankPlan {
            name: "Stray".to_string(),
            rank_id: RankId::new("gone"),
        });
        store.create_marker(NewMarker {
            date: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            label: "Audit".to_string(),
            class_name: None,
        });

        let text = render_chart(&project(&store, Utc::now()));

        assert!(text.starts_with("Officer ["));
        assert!(text.contains("2024 Plan ["));
        assert!(text.contains("2024-01-01 .. 2024-01-31"));
        assert!(text.contains("Untitled"));
        assert!(text.contains("Reliever"));
        assert!(text.contains("Plans without a rank"));
        assert!(text.contains("Stray ["));
        assert!(text.contains("(no assignments)"));
        assert!(text.contains("2024-01-15 Audit"));
    }
}
