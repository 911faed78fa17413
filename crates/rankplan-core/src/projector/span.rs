//! Representative date span of a rank plan.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::Assignment;

/// A closed date range on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Span {
    pub const fn instant(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }
}

/// Span covering every assignment of a plan.
///
/// Start is the earliest `plan_start_date`, end the latest `plan_end_date`.
/// With no assignments the span collapses to `now`.
pub fn plan_span(assignments: &[&Assignment], now: DateTime<Utc>) -> Span {
    let start = assignments.iter().map(|a| a.plan_start_date).min();
    let end = assignments.iter().map(|a| a.plan_end_date).max();
    match (start, end) {
        (Some(start), Some(end)) => Span { start, end },
        _ => Span::instant(now),
    }
}
