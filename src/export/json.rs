//! JSON Export functionality
//!
//! Exports a dashboard report with schema versioning so downstream
//! consumers can detect layout changes.

use crate::error::{PlacesError, PlacesResult};
use crate::reports::DashboardReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Dashboard export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Panel warnings, repeated here so consumers needn't inspect each bundle
    pub warnings: Vec<String>,

    /// The dashboard itself
    pub dashboard: DashboardReport,
}

impl DashboardExport {
    /// Wrap a dashboard report for export
    pub fn new(dashboard: DashboardReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            warnings: dashboard.warnings(),
            dashboard,
        }
    }
}

/// Export a dashboard report as pretty-printed JSON
pub fn export_dashboard_json<W: Write>(
    report: &DashboardReport,
    writer: &mut W,
) -> PlacesResult<()> {
    let export = DashboardExport::new(report.clone());
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| PlacesError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlacesError::Export(e.to_string()))?;
    Ok(())
}
