//! The schedule store: sole owner of all four entity collections.
//!
//! Every mutation is applied in memory first and then mirrored, as a full
//! collection snapshot, to the injected [`KeyValueStore`]. Persistence is
//! best effort: read and write failures are logged and never reach the
//! caller, and the in-memory state stays authoritative for the session.

mod collection;
mod keys;
mod memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::codec::{decode_typed, encode_typed};
use crate::domain::{
    Assignment, AssignmentId, AssignmentUpdate, Entity, Marker, MarkerId, MarkerUpdate,
    NewAssignment, NewMarker, NewRank, NewRankPlan, Rank, RankId, RankPlan, RankPlanId,
    RankPlanUpdate, RankUpdate,
};
use crate::ports::KeyValueStore;

pub use collection::Collection;
pub use keys::{StorageKeys, is_valid_key};
pub use memory::MemoryKeyValueStore;

/// Writes and reads collection snapshots through the storage port.
struct Persistence {
    storage: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl Persistence {
    fn load<T: Entity>(&self) -> Collection<T> {
        let key = self.keys.key_of::<T>();
        let text = match self.storage.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => return Collection::default(),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to read snapshot, starting empty");
                return Collection::default();
            }
        };

        match decode_typed::<Vec<T>>(&text) {
            Ok(items) => {
                debug!(key = %key, count = items.len(), "Loaded snapshot");
                Collection::from_items(items)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Discarding unreadable snapshot");
                Collection::default()
            }
        }
    }

    fn save<T: Entity>(&self, collection: &Collection<T>) {
        let key = self.keys.key_of::<T>();
        let text = match encode_typed(collection.list()) {
            Ok(text) => text,
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to encode snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(&key, &text) {
            warn!(key = %key, error = %e, "Failed to persist snapshot");
        }
    }

    fn remove_all(&self) {
        for key in self.keys.all() {
            if let Err(e) = self.storage.remove(&key) {
                warn!(key = %key, error = %e, "Failed to remove snapshot");
            }
        }
    }
}

/// In-memory schedule state with write-through persistence.
pub struct ScheduleStore {
    persistence: Persistence,
    ranks: Collection<Rank>,
    rank_plans: Collection<RankPlan>,
    assignments: Collection<Assignment>,
    markers: Collection<Marker>,
}

impl ScheduleStore {
    /// Load every collection from `storage` using the default keys.
    ///
    /// Missing or unreadable snapshots load as empty collections.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        Self::load_with_keys(storage, StorageKeys::default())
    }

    /// Load every collection from `storage` under a custom key layout.
    pub fn load_with_keys(storage: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        let persistence = Persistence { storage, keys };
        Self {
            ranks: persistence.load(),
            rank_plans: persistence.load(),
            assignments: persistence.load(),
            markers: persistence.load(),
            persistence,
        }
    }

    pub const fn keys(&self) -> &StorageKeys {
        &self.persistence.keys
    }

    // --- Ranks ---

    pub fn ranks(&self) -> &[Rank] {
        self.ranks.list()
    }

    pub fn rank(&self, id: &RankId) -> Option<&Rank> {
        self.ranks.get(id)
    }

    pub fn create_rank(&mut self, new: NewRank) -> RankId {
        let id = self.ranks.create(new);
        debug!(id = %id, "Created rank");
        self.persistence.save(&self.ranks);
        id
    }

    /// Returns whether a rank with `id` existed. A missing id is a no-op.
    pub fn update_rank(&mut self, id: &RankId, update: RankUpdate) -> bool {
        let found = self.ranks.update(id, update);
        if found {
            self.persistence.save(&self.ranks);
        }
        found
    }

    // --- Rank plans ---

    pub fn rank_plans(&self) -> &[RankPlan] {
        self.rank_plans.list()
    }

    pub fn rank_plan(&self, id: &RankPlanId) -> Option<&RankPlan> {
        self.rank_plans.get(id)
    }

    /// The rank id is not checked; orphaned plans are accepted.
    pub fn create_rank_plan(&mut self, new: NewRankPlan) -> RankPlanId {
        let id = self.rank_plans.create(new);
        debug!(id = %id, "Created rank plan");
        self.persistence.save(&self.rank_plans);
        id
    }

    pub fn update_rank_plan(&mut self, id: &RankPlanId, update: RankPlanUpdate) -> bool {
        let found = self.rank_plans.update(id, update);
        if found {
            self.persistence.save(&self.rank_plans);
        }
        found
    }

    // --- Assignments ---

    pub fn assignments(&self) -> &[Assignment] {
        self.assignments.list()
    }

    pub fn assignment(&self, id: &AssignmentId) -> Option<&Assignment> {
        self.assignments.get(id)
    }

    /// The rank plan id is not checked; orphaned assignments are accepted.
    pub fn create_assignment(&mut self, new: NewAssignment) -> AssignmentId {
        let id = self.assignments.create(new);
        debug!(id = %id, "Created assignment");
        self.persistence.save(&self.assignments);
        id
    }

    pub fn update_assignment(&mut self, id: &AssignmentId, update: AssignmentUpdate) -> bool {
        let found = self.assignments.update(id, update);
        if found {
            self.persistence.save(&self.assignments);
        }
        found
    }

    /// Apply a timeline drag: new start, and new end when the gesture
    /// reports one.
    pub fn move_assignment(
        &mut self,
        id: &AssignmentId,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> bool {
        self.update_assignment(id, AssignmentUpdate::moved(start, end))
    }

    pub fn delete_assignment(&mut self, id: &AssignmentId) -> bool {
        let removed = self.assignments.remove(id);
        if removed {
            debug!(id = %id, "Deleted assignment");
            self.persistence.save(&self.assignments);
        }
        removed
    }

    // --- Markers ---

    pub fn markers(&self) -> &[Marker] {
        self.markers.list()
    }

    pub fn marker(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn create_marker(&mut self, new: NewMarker) -> MarkerId {
        let id = self.markers.create(new);
        debug!(id = %id, "Created marker");
        self.persistence.save(&self.markers);
        id
    }

    pub fn update_marker(&mut self, id: &MarkerId, update: MarkerUpdate) -> bool {
        let found = self.markers.update(id, update);
        if found {
            self.persistence.save(&self.markers);
        }
        found
    }

    pub fn delete_marker(&mut self, id: &MarkerId) -> bool {
        let removed = self.markers.remove(id);
        if removed {
            debug!(id = %id, "Deleted marker");
            self.persistence.save(&self.markers);
        }
        removed
    }

    /// Empty all four collections and delete their persisted entries.
    pub fn clear_all(&mut self) {
        self.ranks.clear();
        self.rank_plans.clear();
        self.assignments.clear();
        self.markers.clear();
        self.persistence.remove_all();
        debug!("Cleared all schedule data");
    }
}
