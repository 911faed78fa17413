//! Shared CLI presentation utilities.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no domain transforms
//! - Chart grouping comes from the core projector

pub mod chart;
pub mod tables;

// Re-export commonly used items
pub use chart::render_chart;
pub use tables::{format_date, format_optional, print_separator, truncate_string};
