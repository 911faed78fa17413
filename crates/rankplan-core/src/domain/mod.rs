//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (storage backends, front ends, etc.).
//!
//! # Structure
//!
//! - `ids` - Per-kind identifier newtypes
//! - `rank` - Ranks and their rank plans
//! - `assignment` - Dated work periods under a rank plan
//! - `marker` - Standalone timeline annotations

mod assignment;
mod ids;
mod marker;
mod rank;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use assignment::{Assignment, AssignmentType, AssignmentUpdate, NewAssignment};
pub use ids::{AssignmentId, EntityId, MarkerId, RankId, RankPlanId};
pub use marker::{Marker, MarkerUpdate, NewMarker};
pub use rank::{NewRank, NewRankPlan, Rank, RankPlan, RankPlanUpdate, RankUpdate};

/// A persisted record owned by the schedule store.
///
/// Each entity kind names the storage collection it lives in, how a record is
/// built from creation input, and how a partial update is merged onto it.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Identifier newtype for this kind.
    type Id: EntityId;
    /// Creation input (everything except the generated id).
    type New;
    /// Partial update applied by shallow merge.
    type Update;

    /// Storage collection name, e.g. `rankPlans`.
    const COLLECTION: &'static str;

    fn id(&self) -> &Self::Id;

    /// Build a record from a freshly generated id and creation input.
    fn create(id: Self::Id, new: Self::New) -> Self;

    /// Merge `update` onto this record. Fields left as `None` are unchanged.
    fn apply(&mut self, update: Self::Update);
}
