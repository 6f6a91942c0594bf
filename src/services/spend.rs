//! Spend aggregations
//!
//! Pure functions over loaded [`SpendRecord`]s: budget KPIs, campus
//! rollups and vendor risk. Nothing here touches the filesystem.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Money, SpendRecord};

/// One point of a rollup: a group key and the summed amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint<K> {
    pub key: K,
    pub amount: Money,
}

/// A vendor flagged by the risk filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRisk {
    pub vendor_name: String,
    pub reliability_score: u8,
}

/// Sum of project budgets, counting each project name once
pub fn total_budget(records: &[SpendRecord]) -> Money {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.project_name.as_str()))
        .map(|r| r.budget_allocated)
        .sum()
}

/// Sum of every expense amount
pub fn total_spend(records: &[SpendRecord]) -> Money {
    records.iter().map(|r| r.amount).sum()
}

/// Budget left after spend (negative when over budget)
pub fn remaining_budget(total_budget: Money, total_spend: Money) -> Money {
    total_budget - total_spend
}

/// Spend as a percentage of budget; 0 when there is no budget
pub fn percent_spent(total_budget: Money, total_spend: Money) -> f64 {
    total_spend.percent_of(total_budget)
}

/// Remaining budget as a percentage of budget; 0 when there is no budget
pub fn percent_remaining(total_budget: Money, total_spend: Money) -> f64 {
    remaining_budget(total_budget, total_spend).percent_of(total_budget)
}

/// Distinct campuses in order of first appearance
pub fn campuses(records: &[SpendRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.campus.as_str()))
        .map(|r| r.campus.clone())
        .collect()
}

fn rollup<K, F>(records: &[SpendRecord], campus: &str, key: F) -> Vec<SeriesPoint<K>>
where
    K: Ord,
    F: Fn(&SpendRecord) -> K,
{
    let mut groups: BTreeMap<K, Money> = BTreeMap::new();
    for record in records.iter().filter(|r| r.is_on_campus(campus)) {
        *groups.entry(key(record)).or_default() += record.amount;
    }
    groups
        .into_iter()
        .map(|(key, amount)| SeriesPoint { key, amount })
        .collect()
}

/// Spend per project on a campus, ordered by project name
pub fn spend_by_project(records: &[SpendRecord], campus: &str) -> Vec<SeriesPoint<String>> {
    rollup(records, campus, |r| r.project_name.clone())
}

/// Spend per expense date on a campus, in chronological order
pub fn spend_by_date(records: &[SpendRecord], campus: &str) -> Vec<SeriesPoint<NaiveDate>> {
    rollup(records, campus, |r| r.expense_date)
}

/// Spend per category on a campus, ordered by category name
pub fn spend_by_category(records: &[SpendRecord], campus: &str) -> Vec<SeriesPoint<String>> {
    rollup(records, campus, |r| r.category.clone())
}

/// The `n` largest points, by amount descending then key ascending
pub fn top_n<K: Ord + Clone>(series: &[SeriesPoint<K>], n: usize) -> Vec<SeriesPoint<K>> {
    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| b.amount.cmp(&a.amount).then_with(|| a.key.cmp(&b.key)));
    sorted.truncate(n);
    sorted
}

/// Vendors on a campus scoring below `threshold`, most at-risk first
///
/// Each vendor appears once; its score is taken from its first expense row.
pub fn risky_vendors(records: &[SpendRecord], campus: &str, threshold: u8) -> Vec<VendorRisk> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut vendors: Vec<VendorRisk> = records
        .iter()
        .filter(|r| r.is_on_campus(campus))
        .filter(|r| seen.insert(r.vendor_name.as_str()))
        .filter(|r| r.reliability_score < threshold)
        .map(|r| VendorRisk {
            vendor_name: r.vendor_name.clone(),
            reliability_score: r.reliability_score,
        })
        .collect();

    vendors.sort_by(|a, b| {
        a.reliability_score
            .cmp(&b.reliability_score)
            .then_with(|| a.vendor_name.cmp(&b.vendor_name))
    });
    vendors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(project: &str, campus: &str, budget: i64, amount: i64) -> SpendRecord {
        SpendRecord {
            project_id: String::new(),
            project_name: project.into(),
            campus: campus.into(),
            budget_allocated: Money::from_dollars(budget),
            vendor_name: "Contractor_101".into(),
            reliability_score: 95,
            expense_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            amount: Money::from_dollars(amount),
            category: "Labor".into(),
        }
    }

    fn vendor_row(campus: &str, vendor: &str, score: u8) -> SpendRecord {
        SpendRecord {
            vendor_name: vendor.into(),
            reliability_score: score,
            ..record("P", campus, 10, 1)
        }
    }

    #[test]
    fn test_kpi_scenario() {
        let records = vec![record("A", "X", 100, 40), record("A", "X", 100, 20)];

        let budget = total_budget(&records);
        let spend = total_spend(&records);
        assert_eq!(budget, Money::from_dollars(100));
        assert_eq!(spend, Money::from_dollars(60));
        assert_eq!(remaining_budget(budget, spend), Money::from_dollars(40));
        assert_eq!(percent_spent(budget, spend), 60.0);
        assert_eq!(percent_remaining(budget, spend), 40.0);
    }

    #[test]
    fn test_total_budget_counts_each_project_once() {
        let records = vec![
            record("A", "X", 100, 1),
            record("B", "X", 50, 1),
            record("A", "Y", 100, 1),
        ];
        assert_eq!(total_budget(&records), Money::from_dollars(150));
    }

    #[test]
    fn test_empty_inputs_are_zero() {
        assert_eq!(total_budget(&[]), Money::zero());
        assert_eq!(total_spend(&[]), Money::zero());
        assert_eq!(percent_spent(Money::zero(), Money::from_dollars(10)), 0.0);
        assert_eq!(percent_remaining(Money::zero(), Money::zero()), 0.0);
    }

    #[test]
    fn test_over_budget_goes_negative() {
        let records = vec![record("A", "X", 100, 150)];
        let budget = total_budget(&records);
        let spend = total_spend(&records);
        assert_eq!(remaining_budget(budget, spend), Money::from_dollars(-50));
        assert_eq!(percent_spent(budget, spend), 150.0);
    }

    #[test]
    fn test_campuses_first_seen_order() {
        let records = vec![
            record("A", "Infinite Loop", 1, 1),
            record("B", "Apple Park", 1, 1),
            record("C", "Infinite Loop", 1, 1),
        ];
        assert_eq!(campuses(&records), vec!["Infinite Loop", "Apple Park"]);
    }

    #[test]
    fn test_spend_by_project_filters_campus_and_sums() {
        let records = vec![
            record("B", "X", 100, 5),
            record("A", "X", 100, 40),
            record("A", "X", 100, 20),
            record("C", "Y", 100, 99),
        ];

        let series = spend_by_project(&records, "X");
        assert_eq!(
            series,
            vec![
                SeriesPoint { key: "A".to_string(), amount: Money::from_dollars(60) },
                SeriesPoint { key: "B".to_string(), amount: Money::from_dollars(5) },
            ]
        );
        assert!(spend_by_project(&records, "Nowhere").is_empty());
    }

    #[test]
    fn test_spend_by_date_is_chronological() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 2, d).unwrap();
        let mut late = record("A", "X", 1, 7);
        late.expense_date = day(20);
        let mut early = record("A", "X", 1, 3);
        early.expense_date = day(2);
        let mut early_again = record("B", "X", 1, 4);
        early_again.expense_date = day(2);

        let series = spend_by_date(&[late, early, early_again], "X");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, day(2));
        assert_eq!(series[0].amount, Money::from_dollars(7));
        assert_eq!(series[1].key, day(20));
    }

    #[test]
    fn test_spend_by_category() {
        let mut permits = record("A", "X", 1, 12);
        permits.category = "Permits".into();
        let records = vec![record("A", "X", 1, 3), permits, record("B", "X", 1, 2)];

        let series = spend_by_category(&records, "X");
        assert_eq!(series[0].key, "Labor");
        assert_eq!(series[0].amount, Money::from_dollars(5));
        assert_eq!(series[1].key, "Permits");
    }

    #[test]
    fn test_top_n_orders_by_amount_then_key() {
        let series = vec![
            SeriesPoint { key: "a".to_string(), amount: Money::from_dollars(5) },
            SeriesPoint { key: "c".to_string(), amount: Money::from_dollars(9) },
            SeriesPoint { key: "b".to_string(), amount: Money::from_dollars(9) },
        ];
        let top = top_n(&series, 2);
        assert_eq!(top[0].key, "b");
        assert_eq!(top[1].key, "c");
        assert_eq!(top_n(&series, 10).len(), 3);
    }

    #[test]
    fn test_risky_vendors_below_threshold_sorted_and_unique() {
        let records = vec![
            vendor_row("X", "Contractor_105", 85),
            vendor_row("X", "Contractor_101", 72),
            vendor_row("X", "Contractor_105", 85),
            vendor_row("X", "Contractor_110", 90),
            vendor_row("X", "Contractor_120", 72),
            vendor_row("Y", "Contractor_130", 10),
        ];

        let risky = risky_vendors(&records, "X", 90);
        let names: Vec<&str> = risky.iter().map(|v| v.vendor_name.as_str()).collect();
        assert_eq!(names, vec!["Contractor_101", "Contractor_120", "Contractor_105"]);
        assert!(risky.iter().all(|v| v.reliability_score < 90));
    }

    #[test]
    fn test_risky_vendors_threshold_edges() {
        let records = vec![vendor_row("X", "V", 70)];
        assert!(risky_vendors(&records, "X", 70).is_empty());
        assert_eq!(risky_vendors(&records, "X", 71).len(), 1);
        assert!(risky_vendors(&[], "X", 100).is_empty());
    }
}
