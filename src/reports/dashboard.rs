//! Dashboard Report
//!
//! Every bundle for one filter selection, ready to render or export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{
    DataDictionaryReport, KpiReport, SpendChartsReport, TelemetryReport, VendorRiskReport,
};
use crate::display::separator;
use crate::error::PlacesResult;
use crate::models::ReportFilter;
use crate::storage::Session;

/// The complete dashboard for one filter selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Filter with the campus resolved
    pub filter: ReportFilter,
    /// Campuses available for selection
    pub campuses: Vec<String>,
    pub kpis: KpiReport,
    pub charts: SpendChartsReport,
    pub vendor_risk: VendorRiskReport,
    pub telemetry: TelemetryReport,
    pub dictionary: DataDictionaryReport,
}

impl DashboardReport {
    /// Generate every bundle for the given filter
    pub fn generate(session: &Session, filter: &ReportFilter) -> PlacesResult<Self> {
        filter.validate(session.campuses())?;
        let resolved = ReportFilter {
            campus: filter
                .resolve_campus(session.campuses())
                .map(str::to_string),
            reliability_threshold: filter.reliability_threshold,
        };

        let report = Self {
            generated_at: Utc::now(),
            campuses: session.campuses().to_vec(),
            kpis: KpiReport::generate(session),
            charts: SpendChartsReport::generate(session, &resolved)?,
            vendor_risk: VendorRiskReport::generate(session, &resolved)?,
            telemetry: TelemetryReport::generate(session),
            dictionary: DataDictionaryReport::generate(session),
            filter: resolved,
        };

        info!(
            campus = ?report.filter.campus,
            threshold = report.filter.reliability_threshold,
            "generated dashboard"
        );
        Ok(report)
    }

    /// Human-readable warnings from panels that could not load their data
    pub fn warnings(&self) -> Vec<String> {
        [
            self.telemetry.status.warning(),
            self.dictionary.status.warning(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Format the whole dashboard for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let rule = format!("\n{}\n\n", separator(80));

        let mut output = String::new();
        output.push_str(&format!(
            "Places Operations & Data Health ({})\n",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        ));
        output.push_str(&format!("Campuses: {}\n\n", self.campuses.join(", ")));
        output.push_str(&self.kpis.format_terminal(currency));
        output.push_str(&rule);
        output.push_str(&self.charts.format_terminal(currency));
        output.push_str(&rule);
        output.push_str(&self.vendor_risk.format_terminal());
        output.push_str(&rule);
        output.push_str(&self.telemetry.format_terminal());
        output.push_str(&rule);
        output.push_str(&self.dictionary.format_terminal());

        output
    }
}
