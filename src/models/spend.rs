//! Spend record model
//!
//! One row of the `fct_project_spend` mart: a single expense line joined
//! with its project and vendor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Money;

/// Highest possible vendor reliability score
pub const MAX_RELIABILITY_SCORE: u8 = 100;

/// One expense line with its project and vendor attributes
///
/// `budget_allocated` belongs to the project and is repeated on every
/// expense row of that project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendRecord {
    /// Project identifier (empty when the dataset doesn't carry one)
    #[serde(default)]
    pub project_id: String,

    /// Project name, the deduplication key for budgets
    pub project_name: String,

    /// Campus the project belongs to
    pub campus: String,

    /// Budget allocated to the whole project
    pub budget_allocated: Money,

    /// Vendor that billed this expense
    pub vendor_name: String,

    /// Vendor reliability, 0-100; lower is riskier
    pub reliability_score: u8,

    /// Date of the expense
    pub expense_date: NaiveDate,

    /// Expense amount
    pub amount: Money,

    /// Expense category (Materials, Labor, ...)
    pub category: String,
}

impl SpendRecord {
    /// Check whether this record belongs to the given campus
    pub fn is_on_campus(&self, campus: &str) -> bool {
        self.campus == campus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_on_campus() {
        let record = SpendRecord {
            project_id: "1001".into(),
            project_name: "Expansion 1001".into(),
            campus: "Apple Park".into(),
            budget_allocated: Money::from_dollars(100_000),
            vendor_name: "Contractor_101".into(),
            reliability_score: 88,
            expense_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            amount: Money::from_cents(1_250_000),
            category: "Labor".into(),
        };

        assert!(record.is_on_campus("Apple Park"));
        assert!(!record.is_on_campus("Culver City"));
    }
}
