//! Grouping children under their parent id.

use std::collections::HashMap;

use crate::domain::{Assignment, RankPlan};

/// Group `items` by the key `key_of` extracts.
///
/// Order within each group follows the input order. Keys with no members
/// never appear.
pub fn group_by_key<'a, T, F>(items: &'a [T], key_of: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut groups: HashMap<&'a str, Vec<&'a T>> = HashMap::new();
    for item in items {
        groups.entry(key_of(item)).or_default().push(item);
    }
    groups
}

/// Rank plans keyed by `rank_id`.
pub fn group_rank_plans_by_rank(plans: &[RankPlan]) -> HashMap<&str, Vec<&RankPlan>> {
    group_by_key(plans, |plan| plan.rank_id.as_ref())
}

/// Assignments keyed by `rank_plan_id`.
pub fn group_assignments_by_plan(assignments: &[Assignment]) -> HashMap<&str, Vec<&Assignment>> {
    group_by_key(assignments, |assignment| assignment.rank_plan_id.as_ref())
}
