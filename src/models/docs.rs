//! Data dictionary models
//!
//! Documentation for dbt models as described by `manifest.json`.

use serde::{Deserialize, Serialize};

/// A documented column of a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDoc {
    /// Column name
    pub name: String,
    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,
}

/// A documented model from the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDocEntry {
    /// Model name
    pub name: String,
    /// Free-text description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Columns ordered by name
    #[serde(default)]
    pub columns: Vec<ColumnDoc>,
}
