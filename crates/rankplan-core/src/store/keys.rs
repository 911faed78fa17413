//! Storage key layout.

use crate::domain::{Assignment, Entity, Marker, Rank, RankPlan};

/// Whether `key` is usable as a storage key by every backend.
///
/// Keys must be non-empty, must not start with `.`, and may only contain
/// ASCII letters, digits, `-`, `_` and `.`. File backends turn keys into
/// file names, and hidden names are reserved for temp files.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Maps each collection to its storage key.
///
/// Keys are the collection names (`ranks`, `rankPlans`, `assignments`,
/// `markers`), optionally behind a prefix so several schedules can share one
/// backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Storage key of the collection holding `T`.
    pub fn key_of<T: Entity>(&self) -> String {
        format!("{}{}", self.prefix, T::COLLECTION)
    }

    /// Every key the store writes.
    pub fn all(&self) -> [String; 4] {
        [
            self.key_of::<Rank>(),
            self.key_of::<RankPlan>(),
            self.key_of::<Assignment>(),
            self.key_of::<Marker>(),
        ]
    }
}
