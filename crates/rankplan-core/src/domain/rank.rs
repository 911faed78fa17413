//! Rank and rank plan domain types.

use serde::{Deserialize, Serialize};

use super::{Entity, RankId, RankPlanId};

/// A top-level grouping such as a job title or grade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rank {
    pub id: RankId,
    pub name: String,
}

/// Data for creating a new rank.
#[derive(Debug, Clone)]
pub struct NewRank {
    pub name: String,
}

/// Data for updating an existing rank.
#[derive(Debug, Clone, Default)]
pub struct RankUpdate {
    pub name: Option<String>,
}

impl Entity for Rank {
    type Id = RankId;
    type New = NewRank;
    type Update = RankUpdate;

    const COLLECTION: &'static str = "ranks";

    fn id(&self) -> &RankId {
        &self.id
    }

    fn create(id: RankId, new: NewRank) -> Self {
        Self { id, name: new.name }
    }

    fn apply(&mut self, update: RankUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

/// A named sub-schedule belonging to one rank.
///
/// `rank_id` is a soft reference: nothing checks that the rank exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPlan {
    pub id: RankPlanId,
    pub name: String,
    pub rank_id: RankId,
}

/// Data for creating a new rank plan.
#[derive(Debug, Clone)]
pub struct NewRankPlan {
    pub name: String,
    pub rank_id: RankId,
}

/// Data for updating an existing rank plan.
#[derive(Debug, Clone, Default)]
pub struct RankPlanUpdate {
    pub name: Option<String>,
    pub rank_id: Option<RankId>,
}

impl Entity for RankPlan {
    type Id = RankPlanId;
    type New = NewRankPlan;
    type Update = RankPlanUpdate;

    const COLLECTION: &'static str = "rankPlans";

    fn id(&self) -> &RankPlanId {
        &self.id
    }

    fn create(id: RankPlanId, new: NewRankPlan) -> Self {
        Self {
            id,
            name: new.name,
            rank_id: new.rank_id,
        }
    }

    fn apply(&mut self, update: RankPlanUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(rank_id) = update.rank_id {
            self.rank_id = rank_id;
        }
    }
}
