//! View-model projection: turns a store snapshot into chart-ready rows.
//!
//! Everything here is a pure function of the store contents and the `now`
//! passed in; nothing mutates the store.

mod feature;
mod grouping;
mod span;

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Assignment, EntityId, Marker, Rank, RankPlan};
use crate::store::ScheduleStore;

pub use feature::{Feature, Status, UNTITLED, assignment_feature, plan_feature};
pub use grouping::{group_assignments_by_plan, group_by_key, group_rank_plans_by_rank};
pub use span::{Span, plan_span};

/// One rank plan row: its summary span plus its assignment bars.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow<'a> {
    pub plan: &'a RankPlan,
    pub span: Span,
    pub feature: Feature,
    pub assignments: Vec<Feature>,
}

/// A rank with its plan rows, in store order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankGroup<'a> {
    pub rank: &'a Rank,
    pub plans: Vec<PlanRow<'a>>,
}

/// Everything the chart needs for one render.
///
/// Plans whose rank is missing and assignments whose plan is missing are
/// collected separately instead of being dropped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView<'a> {
    pub ranks: Vec<RankGroup<'a>>,
    pub orphan_plans: Vec<PlanRow<'a>>,
    pub orphan_assignments: Vec<Feature>,
    pub markers: &'a [Marker],
}

impl ChartView<'_> {
    /// Total number of assignment bars, orphans included.
    pub fn assignment_count(&self) -> usize {
        let rows = self
            .ranks
            .iter()
            .flat_map(|group| &group.plans)
            .chain(&self.orphan_plans);
        rows.map(|row| row.assignments.len()).sum::<usize>() + self.orphan_assignments.len()
    }
}

fn plan_row<'a>(
    plan: &'a RankPlan,
    assignments: &[&Assignment],
    now: DateTime<Utc>,
) -> PlanRow<'a> {
    let span = plan_span(assignments, now);
    PlanRow {
        plan,
        span,
        feature: plan_feature(plan, span),
        assignments: assignments.iter().copied().map(assignment_feature).collect(),
    }
}

fn members<'m, 'a>(
    groups: &'m HashMap<&str, Vec<&'a Assignment>>,
    plan: &RankPlan,
) -> &'m [&'a Assignment] {
    groups
        .get(plan.id.as_str())
        .map_or(&[] as &[&Assignment], Vec::as_slice)
}

/// Project the store into a [`ChartView`], using `now` for empty plans.
pub fn project(store: &ScheduleStore, now: DateTime<Utc>) -> ChartView<'_> {
    let plans_by_rank = group_rank_plans_by_rank(store.rank_plans());
    let assignments_by_plan = group_assignments_by_plan(store.assignments());

    let ranks = store
        .ranks()
        .iter()
        .map(|rank| RankGroup {
            rank,
            plans: plans_by_rank
                .get(rank.id.as_str())
                .map(|plans| {
                    plans
                        .iter()
                        .copied()
                        .map(|plan| plan_row(plan, members(&assignments_by_plan, plan), now))
                        .collect()
                })
                .unwrap_or_default(),
        })
        .collect();

    let known_ranks: HashSet<&str> = store.ranks().iter().map(|r| r.id.as_str()).collect();
    let orphan_plans = store
        .rank_plans()
        .iter()
        .filter(|plan| !known_ranks.contains(plan.rank_id.as_str()))
        .map(|plan| plan_row(plan, members(&assignments_by_plan, plan), now))
        .collect();

    let known_plans: HashSet<&str> = store.rank_plans().iter().map(|p| p.id.as_str()).collect();
    let orphan_assignments = store
        .assignments()
        .iter()
        .filter(|a| !known_plans.contains(a.rank_plan_id.as_str()))
        .map(assignment_feature)
        .collect();

    ChartView {
        ranks,
        orphan_plans,
        orphan_assignments,
        markers: store.markers(),
    }
}

/// [`project`] at the current wall-clock time.
pub fn project_now(store: &ScheduleStore) -> ChartView<'_> {
    project(store, Utc::now())
}
