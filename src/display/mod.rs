//! Display formatting for terminal output
//!
//! Provides utilities for formatting report bundles for terminal display,
//! including tables, bars and percentages.

pub mod report;
pub mod table;

pub use report::{format_bar, format_percentage, format_progress, format_title, separator, truncate};
pub use table::render_table;
