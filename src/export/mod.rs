//! Export module for places-hub
//!
//! Dashboard export in multiple formats:
//! - CSV: one spreadsheet-compatible file per table
//! - JSON: machine-readable snapshot with schema versioning
//! - YAML: human-readable snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_dashboard_csv;
pub use json::{export_dashboard_json, DashboardExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_dashboard_yaml;
