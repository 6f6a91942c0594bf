//! Budget KPI Report
//!
//! The three headline figures of the operations view: allocated budget,
//! capital spent and what remains.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::{format_percentage, format_progress, format_title};
use crate::models::{Money, SpendRecord};
use crate::services;
use crate::storage::Session;

/// Budget KPI bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiReport {
    /// Sum of project budgets, each project counted once
    pub total_budget: Money,
    /// Sum of every expense
    pub total_spend: Money,
    /// Budget minus spend
    pub remaining_budget: Money,
    /// Spend as a percentage of budget
    pub percent_spent: f64,
    /// Remaining budget as a percentage of budget
    pub percent_remaining: f64,
    /// Spend / budget clamped to [0, 1] for progress bars
    pub progress: f64,
}

impl KpiReport {
    /// Generate the KPI bundle over the whole dataset
    pub fn generate(session: &Session) -> Self {
        let report = Self::from_records(session.records());
        debug!(
            budget = report.total_budget.cents(),
            spend = report.total_spend.cents(),
            "generated KPI report"
        );
        report
    }

    fn from_records(records: &[SpendRecord]) -> Self {
        let total_budget = services::total_budget(records);
        let total_spend = services::total_spend(records);
        let percent_spent = services::percent_spent(total_budget, total_spend);

        Self {
            total_budget,
            total_spend,
            remaining_budget: services::remaining_budget(total_budget, total_spend),
            percent_spent,
            percent_remaining: services::percent_remaining(total_budget, total_spend),
            progress: (percent_spent / 100.0).clamp(0.0, 1.0),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = format_title("Campus Construction & Budget Tracking");

        output.push_str(&format!(
            "{:<24} {:>16}\n",
            "Total Allocated Budget",
            self.total_budget.format_whole(currency)
        ));
        output.push_str(&format!(
            "{:<24} {:>16} ({})\n",
            "Total Capital Spent",
            self.total_spend.format_whole(currency),
            format_percentage(self.percent_spent)
        ));
        output.push_str(&format!(
            "{:<24} {:>16} ({})\n",
            "Remaining Budget",
            self.remaining_budget.format_whole(currency),
            format_percentage(self.percent_remaining)
        ));
        output.push_str(&format!(
            "{:<24} {}\n",
            "Budget Used",
            format_progress(self.progress, 30)
        ));

        output
    }
}
