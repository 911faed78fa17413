//! Key-value storage port.
//!
//! The browser build of the editor persists into `localStorage`; native
//! adapters provide the same capability on top of files or memory.

use super::StorageError;

/// Text key-value storage holding one encoded snapshot per key.
///
/// # Design Rules
///
/// - Values are opaque text; the store owns encoding
/// - `get` of an unknown key is `Ok(None)`, not an error
/// - `remove` of an unknown key succeeds
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry for `key`.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// List every key currently stored.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
