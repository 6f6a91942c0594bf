//! Storage layer for places-hub
//!
//! Read-only adapters for the spend dataset and the dbt artifacts, and the
//! [`Session`] that holds everything loaded for one run of the tool.

pub mod file_io;
pub mod manifest;
pub mod run_results;
pub mod spend;

pub use file_io::{read_json_optional, write_json_atomic};
pub use manifest::{load_model_docs, read_model_docs};
pub use run_results::{load_run_results, read_run_results};
pub use spend::{load_spend_records, parse_spend_csv};

use std::path::{Path, PathBuf};

use crate::config::{PlacesPaths, Settings};
use crate::error::{PlacesError, PlacesResult};
use crate::models::{ModelDocEntry, PipelineRunResult, SpendRecord};
use crate::services;

/// Outcome of loading an optional metadata file
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataState<T> {
    /// The file was read and parsed
    Loaded(Vec<T>),
    /// The file does not exist
    Missing { path: PathBuf },
    /// The file exists but failed structural parsing
    Malformed { path: PathBuf, message: String },
}

impl<T> MetadataState<T> {
    /// Turn a reader's result into a state; other errors still propagate
    fn from_read(path: &Path, read: PlacesResult<Option<Vec<T>>>) -> PlacesResult<Self> {
        match read {
            Ok(Some(items)) => Ok(Self::Loaded(items)),
            Ok(None) => Ok(Self::Missing {
                path: path.to_path_buf(),
            }),
            Err(PlacesError::MalformedInput { message, .. }) => Ok(Self::Malformed {
                path: path.to_path_buf(),
                message,
            }),
            Err(e) => Err(e),
        }
    }

    /// Loaded items, or an empty slice for missing/malformed files
    pub fn items(&self) -> &[T] {
        match self {
            Self::Loaded(items) => items,
            _ => &[],
        }
    }
}

/// Everything loaded for one session
///
/// Data is read once when the session is built and never mutated; start a
/// new session to see updated source files.
#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<SpendRecord>,
    campuses: Vec<String>,
    run_results: MetadataState<PipelineRunResult>,
    model_docs: MetadataState<ModelDocEntry>,
}

impl Session {
    /// Load the dataset and dbt artifacts from the locations in `settings`
    pub fn load(paths: &PlacesPaths, settings: &Settings) -> PlacesResult<Self> {
        let records = load_spend_records(&settings.dataset_path(paths))?;

        let run_results_path = settings.run_results_path(paths);
        let run_results =
            MetadataState::from_read(&run_results_path, read_run_results(&run_results_path))?;

        let manifest_path = settings.manifest_path(paths);
        let model_docs = MetadataState::from_read(&manifest_path, read_model_docs(&manifest_path))?;

        Ok(Self::from_parts(records, run_results, model_docs))
    }

    /// Build a session from already-loaded data
    pub fn from_parts(
        records: Vec<SpendRecord>,
        run_results: MetadataState<PipelineRunResult>,
        model_docs: MetadataState<ModelDocEntry>,
    ) -> Self {
        let campuses = services::spend::campuses(&records);
        Self {
            records,
            campuses,
            run_results,
            model_docs,
        }
    }

    /// Build a session from spend records only, with no dbt artifacts
    pub fn from_records(records: Vec<SpendRecord>) -> Self {
        Self::from_parts(
            records,
            MetadataState::Loaded(Vec::new()),
            MetadataState::Loaded(Vec::new()),
        )
    }

    /// All spend records
    pub fn records(&self) -> &[SpendRecord] {
        &self.records
    }

    /// Distinct campuses in first-seen order
    pub fn campuses(&self) -> &[String] {
        &self.campuses
    }

    /// Outcome of loading `run_results.json`
    pub fn run_results(&self) -> &MetadataState<PipelineRunResult> {
        &self.run_results
    }

    /// Outcome of loading `manifest.json`
    pub fn model_docs(&self) -> &MetadataState<ModelDocEntry> {
        &self.model_docs
    }
}
