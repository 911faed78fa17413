//! Path utilities for rankplan data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - Reads no environment itself; callers pass resolved [`Settings`](crate::settings::Settings)
//! - Directory creation lives in `ensure`, resolution in `platform`

mod ensure;
mod error;
mod platform;

pub use ensure::{ensure_directory, verify_writable};
pub use error::PathError;
pub use platform::{APP_DIR_NAME, data_root, storage_dir};
