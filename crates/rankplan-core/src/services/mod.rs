//! Core services - orchestration on top of the store and sessions.
//!
//! Services here don't know about concrete storage backends or front ends;
//! they receive a loaded [`ScheduleStore`](crate::store::ScheduleStore) and
//! drive it.

mod editor;

pub use editor::Editor;
