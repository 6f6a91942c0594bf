//! CSV Export functionality
//!
//! Writes each table of a dashboard to its own CSV file in a directory.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{PlacesError, PlacesResult};
use crate::reports::{DashboardReport, SpendDimension};

fn create(dir: &Path, name: &str) -> PlacesResult<(PathBuf, BufWriter<File>)> {
    let path = dir.join(name);
    let file = File::create(&path).map_err(|e| {
        PlacesError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok((path, BufWriter::new(file)))
}

/// Export every dashboard table to CSV files under `dir`
///
/// Returns the paths written, in a stable order.
pub fn export_dashboard_csv(report: &DashboardReport, dir: &Path) -> PlacesResult<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| {
        PlacesError::Export(format!(
            "Failed to create directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let mut written = Vec::new();

    for (dimension, name) in [
        (SpendDimension::Project, "spend_by_project.csv"),
        (SpendDimension::Date, "spend_by_date.csv"),
        (SpendDimension::Category, "spend_by_category.csv"),
    ] {
        let (path, writer) = create(dir, name)?;
        report.charts.export_csv(dimension, None, writer)?;
        written.push(path);
    }

    let (path, writer) = create(dir, "risky_vendors.csv")?;
    report.vendor_risk.export_csv(writer)?;
    written.push(path);

    let (path, writer) = create(dir, "pipeline_nodes.csv")?;
    report.telemetry.export_csv(writer)?;
    written.push(path);

    info!(dir = %dir.display(), files = written.len(), "exported dashboard tables");
    Ok(written)
}
