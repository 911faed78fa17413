//! Core engine for the rankplan scheduling editor.
//!
//! Ranks own rank plans, rank plans own assignments, and markers annotate the
//! timeline independently. This crate holds the pure domain model, the
//! date-preserving storage codec, the persisted [`ScheduleStore`], the chart
//! projections, and the create/edit session state machines. Storage backends
//! live behind the [`KeyValueStore`] port and are provided by adapters.
#![deny(unused_crate_dependencies)]

pub mod codec;
pub mod domain;
pub mod paths;
pub mod ports;
pub mod projector;
pub mod services;
pub mod session;
pub mod settings;
pub mod store;

// Re-export commonly used types for convenience
pub use codec::{CodecError, StoredValue, decode, decode_typed, encode, encode_typed, revive};
pub use domain::{
    Assignment, AssignmentId, AssignmentType, AssignmentUpdate, Entity, EntityId, Marker,
    MarkerId, MarkerUpdate, NewAssignment, NewMarker, NewRank, NewRankPlan, Rank, RankId,
    RankPlan, RankPlanId, RankPlanUpdate, RankUpdate,
};
pub use paths::{PathError, data_root, ensure_directory, storage_dir};
pub use ports::{CoreError, KeyValueStore, StorageError};
pub use projector::{
    ChartView, Feature, PlanRow, RankGroup, Span, Status, assignment_feature,
    group_assignments_by_plan, group_by_key, group_rank_plans_by_rank, plan_span, project,
    project_now,
};
pub use services::Editor;
pub use session::{
    AssignmentForm, AssignmentKind, EditSession, FormError, RankForm, RankKind, RankPlanForm,
    RankPlanKind, SaveOutcome, SessionKind,
};
pub use settings::{Settings, SettingsError, SettingsUpdate, validate_settings};
pub use store::{Collection, MemoryKeyValueStore, ScheduleStore, StorageKeys, is_valid_key};

// Silence unused dev-dependency warnings for crates only used by some test modules
#[cfg(test)]
use tempfile as _;
