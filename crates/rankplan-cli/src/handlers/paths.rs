//! Paths command handler.
//!
//! Displays the resolved data directory and snapshot files for diagnostics.

use anyhow::Result;

use rankplan_core::{Settings, data_root, validate_settings};
use rankplan_storage::FileKeyValueStore;

use crate::error::CliError;

/// Resolve paths without creating anything, as `key = value` lines.
pub fn resolve_lines(settings: &Settings) -> Result<Vec<String>> {
    validate_settings(settings).map_err(|e| CliError::Config(e.to_string()))?;
    let root = data_root(settings).map_err(|e| CliError::Config(e.to_string()))?;
    let backend = FileKeyValueStore::new(&root);

    let mut lines = vec![format!("data_dir = {}", root.display())];
    for key in settings.storage_keys().all() {
        let path = backend.path_for(&key).map_err(|e| CliError::Config(e.to_string()))?;
        let state = if path.is_file() { "" } else { " (missing)" };
        lines.push(format!("{key} = {}{state}", path.display()));
    }
    Ok(lines)
}

/// Execute the paths command.
pub fn execute(settings: &Settings) -> Result<()> {
    for line in resolve_lines(settings)? {
        println!("{line}");
    }
    Ok(())
}
