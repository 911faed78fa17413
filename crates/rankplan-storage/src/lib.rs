//! Storage backends implementing the [`KeyValueStore`](rankplan_core::KeyValueStore)
//! port, plus the factory that wires them into a loaded store.
#![deny(unsafe_code)]

pub mod factory;
pub mod file;

// Re-export factory for convenient access
pub use factory::StorageFactory;

// Re-export backend implementations
pub use file::FileKeyValueStore;
pub use rankplan_core::MemoryKeyValueStore;
