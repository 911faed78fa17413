//! Assignment domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssignmentId, Entity, RankPlanId};
use crate::codec::tagged_date;

/// The two kinds of work period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    #[default]
    Main,
    Reliever,
}

impl AssignmentType {
    /// Parse a type from its persisted string form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "main" => Some(Self::Main),
            "reliever" => Some(Self::Reliever),
            _ => None,
        }
    }

    /// Convert type to its persisted string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Reliever => "reliever",
        }
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dated work period belonging to one rank plan.
///
/// `plan_start_date <= plan_end_date` is expected but not enforced here;
/// callers constrain it at input time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    #[serde(with = "tagged_date")]
    pub plan_start_date: DateTime<Utc>,
    #[serde(with = "tagged_date")]
    pub plan_end_date: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "tagged_date::option"
    )]
    pub actual_start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "tagged_date::option"
    )]
    pub actual_end_date: Option<DateTime<Utc>>,
    pub rank_plan_id: RankPlanId,
}

/// Data for creating a new assignment.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub name: Option<String>,
    pub kind: AssignmentType,
    pub plan_start_date: DateTime<Utc>,
    pub plan_end_date: DateTime<Utc>,
    pub actual_start_date: Option<DateTime<Utc>>,
    pub actual_end_date: Option<DateTime<Utc>>,
    pub rank_plan_id: RankPlanId,
}

/// Data for updating an existing assignment.
///
/// Optional entity fields use `Some(Some(v))` to set, `Some(None)` to clear,
/// `None` to leave unchanged.
#[derive(Debug, Clone, Default)]
pub struct AssignmentUpdate {
    pub name: Option<Option<String>>,
    pub kind: Option<AssignmentType>,
    pub plan_start_date: Option<DateTime<Utc>>,
    pub plan_end_date: Option<DateTime<Utc>>,
    pub actual_start_date: Option<Option<DateTime<Utc>>>,
    pub actual_end_date: Option<Option<DateTime<Utc>>>,
    pub rank_plan_id: Option<RankPlanId>,
}

impl AssignmentUpdate {
    /// Update produced by dragging a bar on the timeline.
    ///
    /// A drag that only reports a new start leaves the end where it was.
    pub fn moved(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            plan_start_date: Some(start),
            plan_end_date: end,
            ..Default::default()
        }
    }
}

impl Entity for Assignment {
    type Id = AssignmentId;
    type New = NewAssignment;
    type Update = AssignmentUpdate;

    const COLLECTION: &'static str = "assignments";

    fn id(&self) -> &AssignmentId {
        &self.id
    }

    fn create(id: AssignmentId, new: NewAssignment) -> Self {
        Self {
            id,
            name: new.name,
            kind: new.kind,
            plan_start_date: new.plan_start_date,
            plan_end_date: new.plan_end_date,
            actual_start_date: new.actual_start_date,
            actual_end_date: new.actual_end_date,
            rank_plan_id: new.rank_plan_id,
        }
    }

    fn apply(&mut self, update: AssignmentUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if let Some(start) = update.plan_start_date {
            self.plan_start_date = start;
        }
        if let Some(end) = update.plan_end_date {
            self.plan_end_date = end;
        }
        if let Some(actual_start) = update.actual_start_date {
            self.actual_start_date = actual_start;
        }
        if let Some(actual_end) = update.actual_end_date {
            self.actual_end_date = actual_end;
        }
        if let Some(rank_plan_id) = update.rank_plan_id {
            self.rank_plan_id = rank_plan_id;
        }
    }
}
