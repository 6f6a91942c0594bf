//! Vendor Risk Report
//!
//! Vendors working on the selected campus whose reliability score falls
//! below the chosen threshold, most at-risk first.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{format_title, render_table};
use crate::error::{PlacesError, PlacesResult};
use crate::models::ReportFilter;
use crate::services::{self, VendorRisk};
use crate::storage::Session;

/// Vendor risk table for one campus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRiskReport {
    /// Campus the table covers; `None` when the dataset is empty
    pub campus: Option<String>,
    /// Vendors scoring strictly below this are listed
    pub threshold: u8,
    /// Flagged vendors, ascending by score
    pub vendors: Vec<VendorRisk>,
}

impl VendorRiskReport {
    /// Generate the risk table for the filter's campus and threshold
    pub fn generate(session: &Session, filter: &ReportFilter) -> PlacesResult<Self> {
        filter.validate(session.campuses())?;
        let campus = filter.resolve_campus(session.campuses()).map(str::to_string);
        let threshold = filter.reliability_threshold;

        let vendors = campus
            .as_deref()
            .map(|c| services::risky_vendors(session.records(), c, threshold))
            .unwrap_or_default();

        debug!(?campus, threshold, flagged = vendors.len(), "generated vendor risk report");
        Ok(Self {
            campus,
            threshold,
            vendors,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let campus = self.campus.as_deref().unwrap_or("(no campus)");
        let mut output = format_title(&format!("Vendor Risk Assessment: {}", campus));
        output.push_str(&format!(
            "Flagging vendors with reliability scores below {}\n\n",
            self.threshold
        ));

        let rows = self
            .vendors
            .iter()
            .map(|v| vec![v.vendor_name.clone(), v.reliability_score.to_string()])
            .collect();
        output.push_str(&render_table(
            &["Vendor", "Reliability Score"],
            rows,
            "No vendors below the threshold.",
        ));

        output
    }

    /// Export the flagged vendors to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> PlacesResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["campus", "vendor_name", "reliability_score"])
            .map_err(|e| PlacesError::Export(e.to_string()))?;

        let campus = self.campus.as_deref().unwrap_or_default();
        for vendor in &self.vendors {
            let score = vendor.reliability_score.to_string();
            csv_writer
                .write_record([campus, vendor.vendor_name.as_str(), score.as_str()])
                .map_err(|e| PlacesError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| PlacesError::Export(e.to_string()))?;
        Ok(())
    }
}
