//! Pipeline execution statistics from dbt run results

use serde::{Deserialize, Serialize};

use crate::models::{NodeKind, PipelineRunResult};

/// Headline numbers for one dbt run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineKpis {
    pub total_nodes: usize,
    /// Percentage of nodes with status success or pass
    pub success_rate: f64,
    /// Sum of execution times in seconds
    pub total_execution_time: f64,
}

/// A display row for one node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    pub name: String,
    /// Uppercased status, e.g. `SUCCESS`
    pub status: String,
    /// Seconds, rounded to 2 decimal places
    pub execution_time: f64,
}

impl From<&PipelineRunResult> for NodeRow {
    fn from(result: &PipelineRunResult) -> Self {
        Self {
            name: result.name.clone(),
            status: result.status.to_string(),
            execution_time: round2(result.execution_time),
        }
    }
}

/// Run results partitioned by node kind
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeSplit {
    pub models: Vec<NodeRow>,
    pub tests: Vec<NodeRow>,
    /// Seeds, snapshots and anything that is neither a model nor a test
    pub other: Vec<NodeRow>,
}

impl NodeSplit {
    /// Total rows across every bucket
    pub fn len(&self) -> usize {
        self.models.len() + self.tests.len() + self.other.len()
    }

    /// Check if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Execution time of one model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTiming {
    pub model: String,
    pub execution_time: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Node count, success rate and total execution time
pub fn pipeline_kpis(results: &[PipelineRunResult]) -> PipelineKpis {
    let total_nodes = results.len();
    let successes = results.iter().filter(|r| r.status.is_successful()).count();
    let success_rate = if total_nodes == 0 {
        0.0
    } else {
        100.0 * successes as f64 / total_nodes as f64
    };

    PipelineKpis {
        total_nodes,
        success_rate,
        total_execution_time: results.iter().map(|r| r.execution_time).sum(),
    }
}

/// Partition results by node kind, preserving input order within each bucket
pub fn split_by_node_kind(results: &[PipelineRunResult]) -> NodeSplit {
    let mut split = NodeSplit::default();
    for result in results {
        let row = NodeRow::from(result);
        match result.kind {
            NodeKind::Model => split.models.push(row),
            NodeKind::Test => split.tests.push(row),
            NodeKind::Other => split.other.push(row),
        }
    }
    split
}

/// Every result as a display row, in input order
pub fn raw_rows(results: &[PipelineRunResult]) -> Vec<NodeRow> {
    results.iter().map(NodeRow::from).collect()
}

/// Execution time of each model node, in input order
pub fn performance_by_model(results: &[PipelineRunResult]) -> Vec<ModelTiming> {
    results
        .iter()
        .filter(|r| r.kind == NodeKind::Model)
        .map(|r| ModelTiming {
            model: r.name.clone(),
            execution_time: r.execution_time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RunStatus;

    fn result(id: &str, status: RunStatus, time: f64) -> PipelineRunResult {
        PipelineRunResult::new(id, status, time)
    }

    #[test]
    fn test_kpi_scenario() {
        let results = vec![
            result("model.p.m1", RunStatus::Success, 1.5),
            result("test.p.t1", RunStatus::Fail, 0.2),
        ];

        let kpis = pipeline_kpis(&results);
        assert_eq!(kpis.total_nodes, 2);
        assert_eq!(kpis.success_rate, 50.0);
        assert!((kpis.total_execution_time - 1.7).abs() < 1e-9);
    }

    #[test]
    fn test_empty_kpis_are_zero() {
        assert_eq!(
            pipeline_kpis(&[]),
            PipelineKpis {
                total_nodes: 0,
                success_rate: 0.0,
                total_execution_time: 0.0,
            }
        );
    }

    #[test]
    fn test_pass_counts_as_success() {
        let results = vec![
            result("test.p.a", RunStatus::Pass, 0.1),
            result("model.p.b", RunStatus::Skipped, 0.0),
            result("model.p.c", RunStatus::Error, 0.3),
            result("model.p.d", RunStatus::Success, 0.3),
        ];
        assert_eq!(pipeline_kpis(&results).success_rate, 50.0);
    }

    #[test]
    fn test_split_by_node_kind() {
        let results = vec![
            result("model.proj.stg_expenses", RunStatus::Success, 1.23456),
            result("test.proj.not_null_amount", RunStatus::Pass, 0.019),
            result("model.proj.fct_project_spend", RunStatus::Error, 2.0),
        ];

        let split = split_by_node_kind(&results);
        assert_eq!(split.models.len(), 2);
        assert_eq!(split.tests.len(), 1);
        assert!(split.other.is_empty());

        assert_eq!(split.models[0].name, "stg_expenses");
        assert_eq!(split.models[0].status, "SUCCESS");
        assert_eq!(split.models[0].execution_time, 1.23);
        assert_eq!(split.tests[0].name, "not_null_amount");
        assert_eq!(split.tests[0].execution_time, 0.02);
    }

    #[test]
    fn test_split_keeps_every_row_exactly_once() {
        let results = vec![
            result("model.p.a", RunStatus::Success, 0.1),
            result("seed.p.vendors", RunStatus::Success, 0.1),
            result("test.p.b", RunStatus::Fail, 0.1),
            result("snapshot.p.c", RunStatus::Success, 0.1),
            result("model.p.a", RunStatus::Success, 0.1),
        ];

        let split = split_by_node_kind(&results);
        assert_eq!(split.len(), results.len());
        assert_eq!(split.models.len(), 2);
        assert_eq!(split.tests.len(), 1);
        assert_eq!(split.other.len(), 2);
    }

    #[test]
    fn test_performance_by_model() {
        let results = vec![
            result("model.p.stg_vendors", RunStatus::Success, 0.75),
            result("test.p.unique_vendor", RunStatus::Pass, 0.1),
            result("model.p.stg_projects", RunStatus::Success, 1.0),
        ];

        let perf = performance_by_model(&results);
        assert_eq!(perf.len(), 2);
        assert_eq!(perf[0].model, "stg_vendors");
        assert_eq!(perf[1].execution_time, 1.0);
        assert_eq!(raw_rows(&results).len(), 3);
    }
}
