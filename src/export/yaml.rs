//! YAML Export functionality
//!
//! Exports a dashboard report to YAML for human-readable snapshots.

use crate::error::{PlacesError, PlacesResult};
use crate::export::json::DashboardExport;
use crate::reports::DashboardReport;
use std::io::Write;

/// Export a dashboard report to YAML format
pub fn export_dashboard_yaml<W: Write>(
    report: &DashboardReport,
    writer: &mut W,
) -> PlacesResult<()> {
    let export = DashboardExport::new(report.clone());

    writeln!(writer, "# Places Hub Dashboard Export")
        .map_err(|e| PlacesError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| PlacesError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| PlacesError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| PlacesError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| PlacesError::Export(e.to_string()))?;

    Ok(())
}
