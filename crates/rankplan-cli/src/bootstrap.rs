//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: settings are resolved, the file backend is created
//! (via rankplan-storage) and the store is loaded into a core `Editor`.
//!
//! Command handlers receive the fully-composed context and delegate work to it.

use std::path::PathBuf;

use anyhow::Result;
use tracing::debug;

use rankplan_core::{Editor, ScheduleStore, Settings, SettingsUpdate};
use rankplan_storage::StorageFactory;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    settings: Settings,
}

impl CliConfig {
    /// Start from the process environment, then apply command-line flags.
    ///
    /// Clap already folds `RANKPLAN_*` variables into the flags, so a flag
    /// value here is the winning one.
    pub fn from_env_and_flags(data_dir: Option<String>, key_prefix: Option<String>) -> Self {
        Self::from_settings(Settings::from_env()).with_overrides(data_dir, key_prefix)
    }

    pub const fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn with_overrides(mut self, data_dir: Option<String>, key_prefix: Option<String>) -> Self {
        self.settings.merge(&SettingsUpdate {
            data_dir: data_dir.map(Some),
            key_prefix: key_prefix.map(Some),
        });
        self
    }

    pub fn settings(&self) -> Settings {
        self.settings.clone()
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The core editing facade, owning the loaded store.
    pub editor: Editor,
    /// Settings the store was opened with.
    pub settings: Settings,
    /// Directory the snapshots live in, `None` for in-memory contexts.
    pub data_dir: Option<PathBuf>,
}

impl CliContext {
    pub const fn editor(&self) -> &Editor {
        &self.editor
    }

    pub const fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub const fn store(&self) -> &ScheduleStore {
        self.editor.store()
    }
}

/// Bootstrap the CLI application.
///
/// Resolves and creates the data directory, then loads every collection.
/// Unreadable snapshots are logged by the store and load as empty.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let settings = config.settings;
    let dir = StorageFactory::resolve_dir(&settings).map_err(CliError::from)?;
    let store = StorageFactory::open_store_in(&dir, &settings);
    debug!(dir = %dir.display(), "Bootstrapped CLI context");

    Ok(CliContext {
        editor: Editor::new(store),
        settings,
        data_dir: Some(dir),
    })
}

/// Bootstrap with a custom store (for testing).
pub fn bootstrap_with(store: ScheduleStore) -> CliContext {
    CliContext {
        editor: Editor::new(store),
        settings: Settings::with_defaults(),
        data_dir: None,
    }
}
