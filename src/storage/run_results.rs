//! dbt `run_results.json` reader
//!
//! Optional fields are defaulted here, once, so the rest of the crate works
//! with fully populated [`PipelineRunResult`] values.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use super::file_io::read_json_optional;
use crate::error::PlacesResult;
use crate::models::{PipelineRunResult, RunStatus};

#[derive(Debug, Default, Deserialize)]
struct RunResultsFile {
    #[serde(default)]
    results: Vec<RawRunResult>,
}

#[derive(Debug, Deserialize)]
struct RawRunResult {
    #[serde(default)]
    unique_id: String,
    #[serde(default)]
    status: RunStatus,
    #[serde(default)]
    execution_time: f64,
}

impl From<RawRunResult> for PipelineRunResult {
    fn from(raw: RawRunResult) -> Self {
        PipelineRunResult::new(raw.unique_id, raw.status, raw.execution_time)
    }
}

/// Read run results, returning `None` when the file is absent
pub fn read_run_results(path: &Path) -> PlacesResult<Option<Vec<PipelineRunResult>>> {
    let file: Option<RunResultsFile> = read_json_optional(path).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "run results could not be parsed");
    })?;

    match file {
        Some(file) => {
            let results: Vec<PipelineRunResult> =
                file.results.into_iter().map(PipelineRunResult::from).collect();
            info!(path = %path.display(), nodes = results.len(), "loaded run results");
            Ok(Some(results))
        }
        None => {
            info!(path = %path.display(), "run results not found");
            Ok(None)
        }
    }
}

/// Load run results; a missing file yields an empty list
pub fn load_run_results(path: &Path) -> PlacesResult<Vec<PipelineRunResult>> {
    Ok(read_run_results(path)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeKind;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_results.json");

        assert!(read_run_results(&path).unwrap().is_none());
        assert!(load_run_results(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_results.json");
        std::fs::write(&path, r#"{"results": [ {"unique_id": "#).unwrap();

        let err = load_run_results(&path).unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_results.json");
        std::fs::write(&path, r#"{"results": "not a list"}"#).unwrap();

        assert!(load_run_results(&path).unwrap_err().is_malformed());
    }

    #[test]
    fn test_fields_default_when_absent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_results.json");
        std::fs::write(
            &path,
            r#"{
                "metadata": {"dbt_version": "1.7.0"},
                "results": [
                    {"unique_id": "model.apple_places.stg_expenses", "status": "success", "execution_time": 1.25, "thread_id": "Thread-1"},
                    {"unique_id": "test.apple_places.not_null_amount"},
                    {}
                ]
            }"#,
        )
        .unwrap();

        let results = load_run_results(&path).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "stg_expenses");
        assert_eq!(results[0].status, RunStatus::Success);
        assert_eq!(results[0].execution_time, 1.25);
        assert_eq!(results[1].kind, NodeKind::Test);
        assert_eq!(results[1].status, RunStatus::Unknown);
        assert_eq!(results[1].execution_time, 0.0);
        assert_eq!(results[2].kind, NodeKind::Other);
    }

    #[test]
    fn test_object_without_results_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("run_results.json");
        std::fs::write(&path, "{}").unwrap();

        assert_eq!(read_run_results(&path).unwrap(), Some(Vec::new()));
    }
}
