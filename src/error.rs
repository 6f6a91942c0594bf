//! Custom error types for places-hub
//!
//! This module defines the error hierarchy for the crate using thiserror.
//! A missing run-metadata or manifest file is not an error at all (the
//! readers return an empty collection); everything below is a real failure.

use thiserror::Error;

/// The main error type for places-hub operations
#[derive(Error, Debug)]
pub enum PlacesError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for input rows and filter values
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// A metadata file exists but failed structural parsing
    #[error("Malformed input in {path}: {message}")]
    MalformedInput { path: String, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlacesError {
    /// Create a "not found" error for input files
    pub fn file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "File",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for campuses
    pub fn campus_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Campus",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a structural-parse failure of a metadata file
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

impl From<std::io::Error> for PlacesError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlacesError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PlacesError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for places-hub operations
pub type PlacesResult<T> = Result<T, PlacesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlacesError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = PlacesError::campus_not_found("Apple Park");
        assert_eq!(err.to_string(), "Campus not found: Apple Park");
        assert!(err.is_not_found());
        assert!(!err.is_malformed());
    }

    #[test]
    fn test_malformed_input_error() {
        let err = PlacesError::MalformedInput {
            path: "target/run_results.json".into(),
            message: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed input in target/run_results.json: expected value at line 1 column 1"
        );
        assert!(err.is_malformed());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let places_err: PlacesError = io_err.into();
        assert!(matches!(places_err, PlacesError::Io(_)));
    }
}
