//! Core data models for places-hub
//!
//! Spend records from the construction mart, dbt run results and model
//! documentation, plus the filter state that scopes campus reports.

pub mod docs;
pub mod filter;
pub mod money;
pub mod pipeline;
pub mod spend;

pub use docs::{ColumnDoc, ModelDocEntry};
pub use filter::ReportFilter;
pub use money::{Money, MoneyParseError};
pub use pipeline::{NodeKind, PipelineRunResult, RunStatus};
pub use spend::{SpendRecord, MAX_RELIABILITY_SCORE};
