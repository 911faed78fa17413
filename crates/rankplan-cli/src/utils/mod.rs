//! Input parsing and prompting helpers.

pub mod input;
