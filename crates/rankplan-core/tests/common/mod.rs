//! Shared fixtures for rankplan-core integration tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use rankplan_core::{MemoryKeyValueStore, ScheduleStore};

/// Backend that can be shared between two store instances to simulate a
/// restart.
pub fn shared_storage() -> Arc<MemoryKeyValueStore> {
    Arc::new(MemoryKeyValueStore::new())
}

pub fn open(storage: &Arc<MemoryKeyValueStore>) -> ScheduleStore {
    ScheduleStore::load(storage.clone())
}

pub fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}
