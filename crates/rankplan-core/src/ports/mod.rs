//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No filesystem or browser types in any signature
//! - Storage is a plain text key-value capability; encoding stays in core
//! - Errors are semantic, adapters map their own failures onto them

pub mod key_value;

use thiserror::Error;

pub use key_value::KeyValueStore;

#[cfg(test)]
pub use key_value::MockKeyValueStore;

/// Domain-specific errors for storage operations.
///
/// This error type abstracts away backend details (filesystem, browser
/// storage) and gives the store a single failure type to log.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The key is not acceptable to the backend.
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    /// Reading or writing the entry failed.
    #[error("Storage I/O error for '{key}': {reason}")]
    Io { key: String, reason: String },

    /// Backend-specific failure (quota, locking, etc.).
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Core error type for failures surfaced to callers.
///
/// Persistence failures never appear here: the store logs and recovers from
/// them. What remains are configuration problems found while preparing the
/// data directory. Adapters map this to their own error types (CLI exit
/// codes, serialized front-end errors).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Path resolution error.
    #[error(transparent)]
    Path(#[from] crate::paths::PathError),
}
