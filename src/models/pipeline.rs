//! dbt pipeline run models
//!
//! A `PipelineRunResult` is one node execution taken from `run_results.json`.
//! Node kind and display name are derived from the qualified identifier
//! once, when the result is built.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a node execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RunStatus {
    /// Model built successfully
    Success,
    /// Test passed
    Pass,
    /// Test failed
    Fail,
    /// Node raised an error
    Error,
    /// Node was skipped because an upstream node failed
    Skipped,
    /// Anything else dbt may report
    #[default]
    Unknown,
}

impl RunStatus {
    /// Parse a status string as written by dbt (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "pass" => Self::Pass,
            "fail" => Self::Fail,
            "error" => Self::Error,
            "skipped" => Self::Skipped,
            _ => Self::Unknown,
        }
    }

    /// Whether this status counts toward the pipeline success rate
    pub fn is_successful(&self) -> bool {
        matches!(self, Self::Success | Self::Pass)
    }

    /// Lowercase name, as dbt writes it
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
            Self::Skipped => "skipped",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for RunStatus {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

/// Kind of node, taken from the first segment of its qualified identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A model transformation (`model.<project>.<name>`)
    Model,
    /// A data quality test (`test.<project>.<name>`)
    Test,
    /// Seeds, snapshots, operations and unrecognised kinds
    Other,
}

impl NodeKind {
    /// Determine the kind from a dot-delimited qualified identifier
    pub fn from_unique_id(unique_id: &str) -> Self {
        match unique_id.split('.').next().unwrap_or_default() {
            "model" => Self::Model,
            "test" => Self::Test,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => write!(f, "Model"),
            Self::Test => write!(f, "Test"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// One node execution from a dbt run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRunResult {
    /// Qualified identifier, e.g. `model.apple_places.stg_expenses`
    pub unique_id: String,
    /// Node kind derived from the identifier's first segment
    pub kind: NodeKind,
    /// Short name: the identifier's last segment
    pub name: String,
    /// Execution outcome
    pub status: RunStatus,
    /// Wall time in seconds, never negative
    pub execution_time: f64,
}

impl PipelineRunResult {
    /// Build a result, deriving kind and display name from the identifier
    pub fn new(unique_id: impl Into<String>, status: RunStatus, execution_time: f64) -> Self {
        let unique_id = unique_id.into();
        let kind = NodeKind::from_unique_id(&unique_id);
        let name = unique_id
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_string();
        let execution_time = if execution_time.is_finite() {
            execution_time.max(0.0)
        } else {
            0.0
        };

        Self {
            unique_id,
            kind,
            name,
            status,
            execution_time,
        }
    }
}
