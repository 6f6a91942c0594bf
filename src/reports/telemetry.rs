//! Pipeline Telemetry Report
//!
//! dbt run health: node counts, success rate, execution times, and the
//! model/test tables. When `run_results.json` is missing or broken the
//! bundle is empty and its status says why.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PanelStatus;
use crate::display::{format_bar, format_percentage, format_title, render_table};
use crate::error::{PlacesError, PlacesResult};
use crate::services::{self, ModelTiming, NodeRow, NodeSplit, PipelineKpis};
use crate::storage::Session;

const BAR_WIDTH: usize = 24;

/// Pipeline telemetry bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReport {
    /// Whether run results were available
    pub status: PanelStatus,
    /// Node count, success rate, total time
    pub kpis: PipelineKpis,
    /// Rows split into models, tests and other nodes
    pub split: NodeSplit,
    /// Every row in run order
    pub raw: Vec<NodeRow>,
    /// Model execution times, for the bottleneck chart
    pub performance: Vec<ModelTiming>,
}

impl TelemetryReport {
    /// Generate the telemetry bundle from the session's run results
    pub fn generate(session: &Session) -> Self {
        let state = session.run_results();
        let results = state.items();

        let report = Self {
            status: PanelStatus::from_state(state),
            kpis: services::pipeline_kpis(results),
            split: services::split_by_node_kind(results),
            raw: services::raw_rows(results),
            performance: services::performance_by_model(results),
        };

        debug!(
            ready = report.status.is_ready(),
            nodes = report.kpis.total_nodes,
            "generated telemetry report"
        );
        report
    }

    fn node_rows(rows: &[NodeRow]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| {
                vec![
                    r.name.clone(),
                    r.status.clone(),
                    format!("{:.2}", r.execution_time),
                ]
            })
            .collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("DBT Pipeline Health");

        if let Some(warning) = self.status.warning() {
            output.push_str(&warning);
            output.push('\n');
            return output;
        }

        output.push_str(&format!("Total Nodes:          {}\n", self.kpis.total_nodes));
        output.push_str(&format!(
            "Success Rate:         {}\n",
            format_percentage(self.kpis.success_rate)
        ));
        output.push_str(&format!(
            "Total Execution Time: {:.2}s\n\n",
            self.kpis.total_execution_time
        ));

        output.push_str("Pipeline Execution Speeds\n");
        let max = self
            .performance
            .iter()
            .map(|m| m.execution_time)
            .fold(0.0_f64, f64::max);
        let speed_rows = self
            .performance
            .iter()
            .map(|m| {
                vec![
                    m.model.clone(),
                    format!("{:.2}", m.execution_time),
                    format_bar(m.execution_time, max, BAR_WIDTH),
                ]
            })
            .collect();
        output.push_str(&render_table(
            &["Model Node", "Execution Time (seconds)", ""],
            speed_rows,
            "No model nodes in this run.",
        ));

        output.push_str("\nModels\n");
        output.push_str(&render_table(
            &["Model", "Status", "Seconds"],
            Self::node_rows(&self.split.models),
            "No models.",
        ));

        output.push_str("\nTests\n");
        output.push_str(&render_table(
            &["Test", "Status", "Seconds"],
            Self::node_rows(&self.split.tests),
            "No tests.",
        ));

        if !self.split.other.is_empty() {
            output.push_str("\nOther Nodes\n");
            output.push_str(&render_table(
                &["Node", "Status", "Seconds"],
                Self::node_rows(&self.split.other),
                "",
            ));
        }

        output
    }

    /// Export the combined raw table to CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> PlacesResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["node", "status", "execution_time"])
            .map_err(|e| PlacesError::Export(e.to_string()))?;

        for row in &self.raw {
            let seconds = format!("{:.2}", row.execution_time);
            csv_writer
                .write_record([row.name.as_str(), row.status.as_str(), seconds.as_str()])
                .map_err(|e| PlacesError::Export(e.to_string()))?;
        }

        csv_writer
            .flush()
            .map_err(|e| PlacesError::Export(e.to_string()))?;
        Ok(())
    }
}
