//! Display features handed to the chart widget.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::span::Span;
use crate::domain::{Assignment, AssignmentType, EntityId, RankPlan};

/// Name shown for assignments without one.
pub const UNTITLED: &str = "Untitled";

/// Status descriptor controlling a feature's label and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

impl Status {
    pub const MAIN: Self = Self {
        id: "main",
        name: "Main",
        color: "#2563EB",
    };

    pub const RELIEVER: Self = Self {
        id: "reliever",
        name: "Reliever",
        color: "#F59E0B",
    };

    pub const PLAN: Self = Self {
        id: "plan",
        name: "Plan",
        color: "#6B7280",
    };

    pub const fn for_type(kind: AssignmentType) -> Self {
        match kind {
            AssignmentType::Main => Self::MAIN,
            AssignmentType::Reliever => Self::RELIEVER,
        }
    }
}

/// One bar on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: String,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub status: Status,
}

pub fn assignment_feature(assignment: &Assignment) -> Feature {
    let name = assignment
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(UNTITLED);
    Feature {
        id: assignment.id.as_str().to_owned(),
        name: name.to_owned(),
        start_at: assignment.plan_start_date,
        end_at: assignment.plan_end_date,
        status: Status::for_type(assignment.kind),
    }
}

/// Summary bar standing for a whole rank plan.
pub fn plan_feature(plan: &RankPlan, span: Span) -> Feature {
    Feature {
        id: plan.id.as_str().to_owned(),
        name: plan.name.clone(),
        start_at: span.start,
        end_at: span.end,
        status: Status::PLAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AssignmentId, RankPlanId};
    use chrono::TimeZone;

    fn assignment(name: Option<&str>, kind: AssignmentType) -> Assignment {
        Assignment {
            id: AssignmentId::new("a1"),
            name: name.map(str::to_owned),
            kind,
            plan_start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            plan_end_date: Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap(),
            actual_start_date: None,
            actual_end_date: None,
            rank_plan_id: RankPlanId::new("p1"),
        }
    }

    #[test]
    fn test_status_follows_type() {
        let main = assignment_feature(&assignment(Some("Day"), AssignmentType::Main));
        assert_eq!((main.status.id, main.status.name), ("main", "Main"));

        let reliever = assignment_feature(&assignment(Some("Night"), AssignmentType::Reliever));
        assert_eq!(
            (reliever.status.id, reliever.status.name),
            ("reliever", "Reliever")
        );
        assert_ne!(main.status.color, reliever.status.color);
    }

    #[test]
    fn test_missing_or_blank_name_uses_placeholder() {
        assert_eq!(
            assignment_feature(&assignment(None, AssignmentType::Main)).name,
            UNTITLED
        );
        assert_eq!(
            assignment_feature(&assignment(Some("   "), AssignmentType::Main)).name,
            UNTITLED
        );
    }

    #[test]
    fn test_feature_copies_identity_and_dates() {
        let source = assignment(Some("Day"), AssignmentType::Main);
        let feature = assignment_feature(&source);
        assert_eq!(feature.id, "a1");
        assert_eq!(feature.start_at, source.plan_start_date);
        assert_eq!(feature.end_at, source.plan_end_date);
    }
}
