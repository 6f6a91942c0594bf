//! Path management for places-hub
//!
//! Resolves where the spend dataset and the dbt artifacts live.
//!
//! ## Path Resolution Order
//!
//! 1. `PLACES_HUB_DIR` environment variable (if set)
//! 2. The current working directory (a dbt project keeps `target/` beside its data)

use std::path::{Path, PathBuf};

use crate::error::PlacesError;

/// Manages all paths used by places-hub
#[derive(Debug, Clone)]
pub struct PlacesPaths {
    /// Project directory holding the dataset and the dbt `target/` folder
    base_dir: PathBuf,
}

impl PlacesPaths {
    /// Create a new PlacesPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn new() -> Result<Self, PlacesError> {
        let base_dir = if let Ok(custom) = std::env::var("PLACES_HUB_DIR") {
            PathBuf::from(custom)
        } else {
            std::env::current_dir().map_err(|e| {
                PlacesError::Config(format!("Could not determine current directory: {}", e))
            })?
        };

        Ok(Self { base_dir })
    }

    /// Create PlacesPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("places-hub.json")
    }

    /// Get the dbt target directory (`<base>/target/`)
    pub fn target_dir(&self) -> PathBuf {
        self.base_dir.join("target")
    }

    /// Default location of the `fct_project_spend` CSV export
    pub fn dataset_file(&self) -> PathBuf {
        self.base_dir.join("data").join("fct_project_spend.csv")
    }

    /// Default location of dbt's `run_results.json`
    pub fn run_results_file(&self) -> PathBuf {
        self.target_dir().join("run_results.json")
    }

    /// Default location of dbt's `manifest.json`
    pub fn manifest_file(&self) -> PathBuf {
        self.target_dir().join("manifest.json")
    }

    /// Resolve a user-supplied path against the base directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
