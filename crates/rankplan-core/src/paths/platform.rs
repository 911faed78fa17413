//! Data directory resolution.

use std::path::PathBuf;

use super::ensure::ensure_directory;
use super::error::PathError;
use crate::settings::Settings;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "rankplan";

/// Expand a leading `~` and reject blank input.
fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    if trimmed == "~" {
        return dirs::home_dir().ok_or(PathError::NoHomeDir);
    }
    if let Some(rest) = trimmed.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(trimmed))
}

/// Get the root directory for application data.
///
/// Resolution order:
/// 1. `settings.data_dir` (populated from `--data-dir` or `RANKPLAN_DATA_DIR`)
/// 2. System data directory (e.g., `~/.local/share/rankplan`)
///
/// Nothing is created here; see [`storage_dir`].
pub fn data_root(settings: &Settings) -> Result<PathBuf, PathError> {
    if let Some(dir) = settings.data_dir.as_deref() {
        return normalize_user_path(dir);
    }

    let data_dir = dirs::data_local_dir().ok_or(PathError::NoDataDir)?;
    Ok(data_dir.join(APP_DIR_NAME))
}

/// Directory the snapshot files are written to, created if missing.
pub fn storage_dir(settings: &Settings) -> Result<PathBuf, PathError> {
    let root = data_root(settings)?;
    ensure_directory(&root)?;
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn settings_with(dir: &str) -> Settings {
        Settings {
            data_dir: Some(dir.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let root = data_root(&settings_with("/srv/schedules")).unwrap();
        assert_eq!(root, PathBuf::from("/srv/schedules"));
    }

    #[test]
    fn test_blank_data_dir_is_rejected() {
        assert!(matches!(
            data_root(&settings_with("  ")),
            Err(PathError::EmptyPath)
        ));
    }

    #[test]
    fn test_default_root_ends_with_app_dir() {
        if let Ok(root) = data_root(&Settings::default()) {
            assert!(root.ends_with(APP_DIR_NAME));
        }
    }

    #[test]
    fn test_storage_dir_is_created() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("store");
        let settings = settings_with(&target.to_string_lossy());

        let dir = storage_dir(&settings).unwrap();

        assert_eq!(dir, target);
        assert!(target.is_dir());
    }
}
