//! Settings types and validation.
//!
//! Settings decide where snapshots live and how their keys are named. They
//! are pure values; adapters decide where they come from (flags, `.env`,
//! process environment).

use serde::{Deserialize, Serialize};

use crate::store::{StorageKeys, is_valid_key};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "RANKPLAN_DATA_DIR";

/// Environment variable setting the storage key prefix.
pub const KEY_PREFIX_ENV: &str = "RANKPLAN_KEY_PREFIX";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the persisted snapshots. `None` uses the platform
    /// data directory.
    pub data_dir: Option<String>,

    /// Prefix put in front of every collection key.
    pub key_prefix: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            data_dir: None,
            key_prefix: None,
        }
    }

    /// Build settings from a variable lookup such as [`std::env::var`].
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        Self {
            data_dir: read(DATA_DIR_ENV),
            key_prefix: read(KEY_PREFIX_ENV),
        }
    }

    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Key layout the store should use.
    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::new(self.key_prefix.clone().unwrap_or_default())
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref dir) = other.data_dir {
            self.data_dir.clone_from(dir);
        }
        if let Some(ref prefix) = other.key_prefix {
            self.key_prefix.clone_from(prefix);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub data_dir: Option<Option<String>>,
    pub key_prefix: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Data directory cannot be empty")]
    EmptyDataDir,

    #[error(
        "Key prefix may only contain letters, digits, '-', '_' and '.', and must not start with '.', got {0:?}"
    )]
    InvalidKeyPrefix(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if settings
        .data_dir
        .as_ref()
        .is_some_and(|dir| dir.trim().is_empty())
    {
        return Err(SettingsError::EmptyDataDir);
    }

    // An empty prefix leaves the bare collection names, which are valid.
    if let Some(prefix) = &settings.key_prefix {
        if !prefix.is_empty() && !is_valid_key(prefix) {
            return Err(SettingsError::InvalidKeyPrefix(prefix.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::with_defaults();
        assert_eq!(settings.data_dir, None);
        assert_eq!(settings.key_prefix, None);
        assert!(validate_settings(&settings).is_ok());
        assert_eq!(settings.storage_keys(), StorageKeys::default());
    }

    #[test]
    fn test_from_lookup_reads_known_variables() {
        let vars = HashMap::from([
            (DATA_DIR_ENV, "/srv/rankplan".to_string()),
            (KEY_PREFIX_ENV, "   ".to_string()),
        ]);
        let settings = Settings::from_lookup(|name| vars.get(name).cloned());
        assert_eq!(settings.data_dir.as_deref(), Some("/srv/rankplan"));
        assert_eq!(settings.key_prefix, None);
    }

    #[test]
    fn test_merge_updates_and_clears() {
        let mut settings = Settings {
            data_dir: Some("/tmp/a".to_string()),
            key_prefix: Some("team.".to_string()),
        };
        settings.merge(&SettingsUpdate {
            data_dir: Some(Some("/tmp/b".to_string())),
            key_prefix: Some(None),
        });
        assert_eq!(settings.data_dir.as_deref(), Some("/tmp/b"));
        assert_eq!(settings.key_prefix, None);
    }

    #[test]
    fn test_storage_keys_use_prefix() {
        let settings = Settings {
            key_prefix: Some("team-a.".to_string()),
            ..Default::default()
        };
        assert_eq!(settings.storage_keys().all()[0], "team-a.ranks");
    }

    #[test]
    fn test_validate_empty_data_dir() {
        let settings = Settings {
            data_dir: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::EmptyDataDir)
        ));
    }

    #[test]
    fn test_validate_key_prefix_rejects_leading_dot() {
        for prefix in [".", ".hidden-"] {
            let settings = Settings {
                key_prefix: Some(prefix.to_string()),
                ..Default::default()
            };
            assert!(matches!(
                validate_settings(&settings),
                Err(SettingsError::InvalidKeyPrefix(_))
            ));
        }

        let settings = Settings {
            key_prefix: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_validate_key_prefix_rejects_path_separators() {
        let settings = Settings {
            key_prefix: Some("../".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::InvalidKeyPrefix(_))
        ));
    }
}
