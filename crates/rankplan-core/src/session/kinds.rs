//! The three dialog kinds: rank, rank plan and assignment.

use chrono::{DateTime, Utc};

use super::{FormError, SessionKind};
use crate::domain::{
    Assignment, AssignmentType, AssignmentUpdate, NewAssignment, NewRank, NewRankPlan, Rank,
    RankId, RankPlan, RankPlanId, RankPlanUpdate, RankUpdate,
};
use crate::store::ScheduleStore;

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_owned())
    }
}

fn fill_parent(current: String, parent: Option<&str>) -> String {
    match parent {
        Some(parent) if current.trim().is_empty() => parent.to_owned(),
        _ => current,
    }
}

/// Rank dialog fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankForm {
    pub name: String,
}

/// Rank dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankKind;

impl SessionKind for RankKind {
    type Entity = Rank;
    type Form = RankForm;
    type Draft = NewRank;

    const LABEL: &'static str = "rank";

    fn entity_id(entity: &Rank) -> String {
        entity.id.to_string()
    }

    fn seed(entity: &Rank) -> RankForm {
        RankForm {
            name: entity.name.clone(),
        }
    }

    fn validate(form: RankForm) -> Result<NewRank, FormError> {
        Ok(NewRank {
            name: required(&form.name, "name")?,
        })
    }

    fn create(store: &mut ScheduleStore, draft: NewRank) -> String {
        store.create_rank(draft).to_string()
    }

    fn update(store: &mut ScheduleStore, entity: &Rank, draft: NewRank) -> bool {
        store.update_rank(
            &entity.id,
            RankUpdate {
                name: Some(draft.name),
            },
        )
    }
}

/// Rank plan dialog fields. `rank_id` is the owning rank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankPlanForm {
    pub name: String,
    pub rank_id: String,
}

/// Rank plan dialog. Creating under a rank binds that rank as parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPlanKind;

impl SessionKind for RankPlanKind {
    type Entity = RankPlan;
    type Form = RankPlanForm;
    type Draft = NewRankPlan;

    const LABEL: &'static str = "rank plan";

    fn entity_id(entity: &RankPlan) -> String {
        entity.id.to_string()
    }

    fn seed(entity: &RankPlan) -> RankPlanForm {
        RankPlanForm {
            name: entity.name.clone(),
            rank_id: entity.rank_id.to_string(),
        }
    }

    fn with_parent(form: RankPlanForm, parent: Option<&str>) -> RankPlanForm {
        RankPlanForm {
            rank_id: fill_parent(form.rank_id, parent),
            ..form
        }
    }

    fn validate(form: RankPlanForm) -> Result<NewRankPlan, FormError> {
        Ok(NewRankPlan {
            name: required(&form.name, "name")?,
            rank_id: RankId::new(required(&form.rank_id, "rank")?),
        })
    }

    fn create(store: &mut ScheduleStore, draft: NewRankPlan) -> String {
        store.create_rank_plan(draft).to_string()
    }

    fn update(store: &mut ScheduleStore, entity: &RankPlan, draft: NewRankPlan) -> bool {
        store.update_rank_plan(
            &entity.id,
            RankPlanUpdate {
                name: Some(draft.name),
                rank_id: Some(draft.rank_id),
            },
        )
    }
}

/// Assignment dialog fields.
///
/// Plan dates are optional here only so a blank form can exist; saving
/// requires both. The name may stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentForm {
    pub name: String,
    pub kind: AssignmentType,
    pub plan_start: Option<DateTime<Utc>>,
    pub plan_end: Option<DateTime<Utc>>,
    pub actual_start: Option<DateTime<Utc>>,
    pub actual_end: Option<DateTime<Utc>>,
    pub rank_plan_id: String,
}

/// Assignment dialog. Creating under a plan binds that plan as parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentKind;

impl SessionKind for AssignmentKind {
    type Entity = Assignment;
    type Form = AssignmentForm;
    type Draft = NewAssignment;

    const LABEL: &'static str = "assignment";

    fn entity_id(entity: &Assignment) -> String {
        entity.id.to_string()
    }

    fn seed(entity: &Assignment) -> AssignmentForm {
        AssignmentForm {
            name: entity.name.clone().unwrap_or_default(),
            kind: entity.kind,
            plan_start: Some(entity.plan_start_date),
            plan_end: Some(entity.plan_end_date),
            actual_start: entity.actual_start_date,
            actual_end: entity.actual_end_date,
            rank_plan_id: entity.rank_plan_id.to_string(),
        }
    }

    fn with_parent(form: AssignmentForm, parent: Option<&str>) -> AssignmentForm {
        AssignmentForm {
            rank_plan_id: fill_parent(form.rank_plan_id, parent),
            ..form
        }
    }

    fn validate(form: AssignmentForm) -> Result<NewAssignment, FormError> {
        let plan_start_date = form
            .plan_start
            .ok_or(FormError::Required("plan start date"))?;
        let plan_end_date = form.plan_end.ok_or(FormError::Required("plan end date"))?;
        let rank_plan_id = RankPlanId::new(required(&form.rank_plan_id, "rank plan")?);
        Ok(NewAssignment {
            name: required(&form.name, "name").ok(),
            kind: form.kind,
            plan_start_date,
            plan_end_date,
            actual_start_date: form.actual_start,
            actual_end_date: form.actual_end,
            rank_plan_id,
        })
    }

    fn create(store: &mut ScheduleStore, draft: NewAssignment) -> String {
        store.create_assignment(draft).to_string()
    }

    fn update(store: &mut ScheduleStore, entity: &Assignment, draft: NewAssignment) -> bool {
        store.update_assignment(
            &entity.id,
            AssignmentUpdate {
                name: Some(draft.name),
                kind: Some(draft.kind),
                plan_start_date: Some(draft.plan_start_date),
                plan_end_date: Some(draft.plan_end_date),
                actual_start_date: Some(draft.actual_start_date),
                actual_end_date: Some(draft.actual_end_date),
                rank_plan_id: Some(draft.rank_plan_id),
            },
        )
    }
}
