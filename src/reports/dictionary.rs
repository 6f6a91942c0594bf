//! Data Dictionary Report
//!
//! Model and column documentation from the dbt manifest.

use serde::{Deserialize, Serialize};

use super::PanelStatus;
use crate::display::{format_title, render_table, truncate};
use crate::models::ModelDocEntry;
use crate::storage::Session;

const DESCRIPTION_WIDTH: usize = 72;

/// Data dictionary bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDictionaryReport {
    /// Whether the manifest was available
    pub status: PanelStatus,
    /// Documented models, ordered by name
    pub models: Vec<ModelDocEntry>,
}

impl DataDictionaryReport {
    /// Generate the dictionary from the session's manifest
    pub fn generate(session: &Session) -> Self {
        let state = session.model_docs();
        Self {
            status: PanelStatus::from_state(state),
            models: state.items().to_vec(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = format_title("Data Dictionary");

        if let Some(warning) = self.status.warning() {
            output.push_str(&warning);
            output.push('\n');
            return output;
        }

        if self.models.is_empty() {
            output.push_str("No models documented.\n");
            return output;
        }

        for model in &self.models {
            output.push('\n');
            output.push_str(&model.name);
            output.push('\n');
            if !model.description.is_empty() {
                output.push_str(&format!("  {}\n", model.description));
            }

            let rows = model
                .columns
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        truncate(&c.description, DESCRIPTION_WIDTH),
                    ]
                })
                .collect();
            output.push_str(&render_table(
                &["Column", "Description"],
                rows,
                "  (no columns documented)",
            ));
        }

        output
    }
}
