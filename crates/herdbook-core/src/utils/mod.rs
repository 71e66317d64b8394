//! Utility functions for string formatting.

pub mod format;

pub use format::{format_date, humanize, yes_no};
