//! Report filter state
//!
//! The user-controlled selection (campus and reliability threshold). It is
//! passed into every campus-scoped aggregation and never persisted.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_RELIABILITY_THRESHOLD;
use crate::error::{PlacesError, PlacesResult};

/// Lowest threshold the vendor-risk input accepts
pub const MIN_THRESHOLD: u8 = 1;
/// Highest threshold the vendor-risk input accepts
pub const MAX_THRESHOLD: u8 = 100;

/// Filter selections for campus-scoped reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Selected campus; `None` means the first campus in the dataset
    pub campus: Option<String>,
    /// Vendors scoring strictly below this are flagged
    pub reliability_threshold: u8,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self {
            campus: None,
            reliability_threshold: DEFAULT_RELIABILITY_THRESHOLD,
        }
    }
}

impl ReportFilter {
    /// Create a filter for a specific campus
    pub fn for_campus(campus: impl Into<String>) -> Self {
        Self {
            campus: Some(campus.into()),
            ..Default::default()
        }
    }

    /// Set the reliability threshold
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.reliability_threshold = threshold;
        self
    }

    /// Check the threshold range and that the campus exists in `campuses`
    pub fn validate(&self, campuses: &[String]) -> PlacesResult<()> {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&self.reliability_threshold) {
            return Err(PlacesError::Validation(format!(
                "Reliability threshold must be between {} and {}, got {}",
                MIN_THRESHOLD, MAX_THRESHOLD, self.reliability_threshold
            )));
        }

        if let Some(campus) = &self.campus {
            if !campuses.iter().any(|c| c == campus) {
                return Err(PlacesError::campus_not_found(campus));
            }
        }

        Ok(())
    }

    /// The campus to report on: the explicit selection or the first known campus
    pub fn resolve_campus<'a>(&'a self, campuses: &'a [String]) -> Option<&'a str> {
        self.campus
            .as_deref()
            .or_else(|| campuses.first().map(String::as_str))
    }
}
