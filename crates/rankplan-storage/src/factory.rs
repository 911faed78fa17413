//! Composition utilities for building a loaded store on a storage backend.
//!
//! This module is focused purely on construction and should not contain any
//! domain logic.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use rankplan_core::{
    CoreError, Editor, MemoryKeyValueStore, ScheduleStore, Settings, storage_dir,
    validate_settings,
};

use crate::file::FileKeyValueStore;

/// Factory for creating stores with concrete backends.
pub struct StorageFactory;

impl StorageFactory {
    /// Validate `settings`, then resolve and create the snapshot directory
    /// they describe.
    pub fn resolve_dir(settings: &Settings) -> Result<PathBuf, CoreError> {
        validate_settings(settings)?;
        Ok(storage_dir(settings)?)
    }

    /// Load a file-backed store.
    ///
    /// This is the recommended way for front ends to obtain a store.
    pub fn open_store(settings: &Settings) -> anyhow::Result<ScheduleStore> {
        let dir = Self::resolve_dir(settings).context("Cannot open schedule store")?;
        Ok(Self::open_store_in(dir, settings))
    }

    /// Load a store from snapshot files in an already prepared `dir`.
    pub fn open_store_in(dir: impl Into<PathBuf>, settings: &Settings) -> ScheduleStore {
        let backend = Arc::new(FileKeyValueStore::new(dir));
        info!(dir = %backend.dir().display(), "Opening schedule store");
        ScheduleStore::load_with_keys(backend, settings.storage_keys())
    }

    /// Load a file-backed store wrapped in an [`Editor`] with every dialog
    /// closed.
    pub fn open_editor(settings: &Settings) -> anyhow::Result<Editor> {
        Ok(Editor::new(Self::open_store(settings)?))
    }

    /// Create an empty store that persists nowhere.
    pub fn memory_store() -> ScheduleStore {
        ScheduleStore::load(Arc::new(MemoryKeyValueStore::new()))
    }
}
