//! Spend Charts Report
//!
//! Chart-ready rollups for the selected campus: spend per project, per
//! expense date and per category.

use std::fmt;
use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{format_bar, format_title, render_table};
use crate::error::{PlacesError, PlacesResult};
use crate::models::{Money, ReportFilter};
use crate::services::{self, SeriesPoint};
use crate::storage::Session;

const BAR_WIDTH: usize = 24;

/// Dimension a spend series is grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpendDimension {
    Project,
    Date,
    Category,
}

impl fmt::Display for SpendDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project => write!(f, "Project"),
            Self::Date => write!(f, "Date"),
            Self::Category => write!(f, "Category"),
        }
    }
}

/// Spend rollups for one campus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendChartsReport {
    /// Campus the series cover; `None` when the dataset is empty
    pub campus: Option<String>,
    /// Spend per project, ordered by project name
    pub by_project: Vec<SeriesPoint<String>>,
    /// Spend per day, chronological
    pub by_date: Vec<SeriesPoint<NaiveDate>>,
    /// Spend per category, ordered by category name
    pub by_category: Vec<SeriesPoint<String>>,
}

impl SpendChartsReport {
    /// Generate the rollups for the filter's campus
    pub fn generate(session: &Session, filter: &ReportFilter) -> PlacesResult<Self> {
        filter.validate(session.campuses())?;
        let campus = filter.resolve_campus(session.campuses()).map(str::to_string);

        let report = match campus {
            Some(c) => Self {
                by_project: services::spend_by_project(session.records(), &c),
                by_date: services::spend_by_date(session.records(), &c),
                by_category: services::spend_by_category(session.records(), &c),
                campus: Some(c),
            },
            None => Self {
                campus: None,
                by_project: Vec::new(),
                by_date: Vec::new(),
                by_category: Vec::new(),
            },
        };

        debug!(
            campus = ?report.campus,
            projects = report.by_project.len(),
            days = report.by_date.len(),
            "generated spend charts"
        );
        Ok(report)
    }

    /// Series for one dimension with keys rendered as text
    pub fn series(&self, dimension: SpendDimension) -> Vec<SeriesPoint<String>> {
        match dimension {
            SpendDimension::Project => self.by_project.clone(),
            SpendDimension::Category => self.by_category.clone(),
            SpendDimension::Date => self
                .by_date
                .iter()
                .map(|p| SeriesPoint {
                    key: p.key.to_string(),
                    amount: p.amount,
                })
                .collect(),
        }
    }

    /// Largest `n` points of a dimension
    pub fn top(&self, dimension: SpendDimension, n: usize) -> Vec<SeriesPoint<String>> {
        services::top_n(&self.series(dimension), n)
    }

    fn points(&self, dimension: SpendDimension, top: Option<usize>) -> Vec<SeriesPoint<String>> {
        match top {
            Some(n) => self.top(dimension, n),
            None => self.series(dimension),
        }
    }

    /// Format one series for terminal display, optionally limited to the top `n`
    pub fn format_series(
        &self,
        dimension: SpendDimension,
        top: Option<usize>,
        currency: &str,
    ) -> String {
        let series = self.points(dimension, top);

        let campus = self.campus.as_deref().unwrap_or("(no campus)");
        let mut output = format_title(&format!("Spend by {}: {}", dimension, campus));

        let max = series
            .iter()
            .map(|p| p.amount.as_f64())
            .fold(0.0_f64, f64::max);
        let total: Money = series.iter().map(|p| p.amount).sum();

        let rows = series
            .iter()
            .map(|p| {
                vec![
                    p.key.clone(),
                    p.amount.format_with_symbol(currency),
                    format_bar(p.amount.as_f64(), max, BAR_WIDTH),
                ]
            })
            .collect();
        let key_header = dimension.to_string();
        output.push_str(&render_table(
            &[key_header.as_str(), "Amount", ""],
            rows,
            "No spend recorded for this campus.",
        ));
        if !series.is_empty() {
            output.push_str(&format!("Total: {}\n", total.format_with_symbol(currency)));
        }

        output
    }

    /// Format every series for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        [
            SpendDimension::Project,
            SpendDimension::Date,
            SpendDimension::Category,
        ]
        .iter()
        .map(|d| self.format_series(*d, None, currency))
        .collect::<Vec<_>>()
        .join("\n")
    }

    /// Export one series to CSV, optionally limited to the top `n`
    pub fn export_csv<W: Write>(
        &self,
        dimension: SpendDimension,
        top: Option<usize>,
        writer: W,
    ) -> PlacesResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let key_header = dimension.to_string().to_lowercase();
        csv_writer
            .write_record(["campus", key_header.as_str(), "amount"])
            .map_err(|e| PlacesError::Export(e.to_string()))?;

        let campus = self.campus.as_deref().unwrap_or_default();
        for point in self.points(dimension, top) {
            let amount = format!("{:.2}", point.amount.as_f64());
            csv_writer
                .write_record([campus, point.key.as_str(), amount.as_str()])
                .map_err(|e| PlacesError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| PlacesError::Export(e.to_string()))?;
        Ok(())
    }
}
