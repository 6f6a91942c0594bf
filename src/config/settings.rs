//! User settings for places-hub
//!
//! Persists input-file overrides and report defaults such as the vendor
//! reliability threshold.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::PlacesPaths;
use crate::error::PlacesError;
use crate::storage::file_io::write_json_atomic;

/// Reliability threshold pre-selected for vendor flagging
pub const DEFAULT_RELIABILITY_THRESHOLD: u8 = 90;

/// User settings for places-hub
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Override for the spend dataset location (relative to the base directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_file: Option<PathBuf>,

    /// Override for the dbt run results location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_results_file: Option<PathBuf>,

    /// Override for the dbt manifest location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manifest_file: Option<PathBuf>,

    /// Vendors scoring below this are flagged as risky
    #[serde(default = "default_reliability_threshold")]
    pub default_reliability_threshold: u8,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_reliability_threshold() -> u8 {
    DEFAULT_RELIABILITY_THRESHOLD
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            dataset_file: None,
            run_results_file: None,
            manifest_file: None,
            default_reliability_threshold: default_reliability_threshold(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlacesPaths) -> Result<Self, PlacesError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| PlacesError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlacesError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlacesPaths) -> Result<(), PlacesError> {
        write_json_atomic(paths.settings_file(), self)
    }

    /// Resolved location of the spend dataset
    pub fn dataset_path(&self, paths: &PlacesPaths) -> PathBuf {
        self.dataset_file
            .as_ref()
            .map(|p| paths.resolve(p))
            .unwrap_or_else(|| paths.dataset_file())
    }

    /// Resolved location of dbt's run results
    pub fn run_results_path(&self, paths: &PlacesPaths) -> PathBuf {
        self.run_results_file
            .as_ref()
            .map(|p| paths.resolve(p))
            .unwrap_or_else(|| paths.run_results_file())
    }

    /// Resolved location of dbt's manifest
    pub fn manifest_path(&self, paths: &PlacesPaths) -> PathBuf {
        self.manifest_file
            .as_ref()
            .map(|p| paths.resolve(p))
            .unwrap_or_else(|| paths.manifest_file())
    }
}
