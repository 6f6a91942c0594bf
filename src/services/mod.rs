//! Aggregation layer for places-hub
//!
//! Deterministic, side-effect-free computations over data held by a
//! [`Session`](crate::storage::Session). Callers may invoke them repeatedly
//! with different filter values without reloading anything.

pub mod pipeline;
pub mod spend;

pub use pipeline::{
    performance_by_model, pipeline_kpis, raw_rows, split_by_node_kind, ModelTiming, NodeRow,
    NodeSplit, PipelineKpis,
};
pub use spend::{
    campuses, percent_remaining, percent_spent, remaining_budget, risky_vendors,
    spend_by_category, spend_by_date, spend_by_project, top_n, total_budget, total_spend,
    SeriesPoint, VendorRisk,
};
