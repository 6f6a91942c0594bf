//! Spend dataset reader
//!
//! Reads the `fct_project_spend` mart exported as CSV. Columns are located
//! by header name, so column order in the export doesn't matter.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{PlacesError, PlacesResult};
use crate::models::{Money, SpendRecord, MAX_RELIABILITY_SCORE};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column positions of the mart's fields within a CSV header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendColumns {
    pub project_id: Option<usize>,
    pub project_name: usize,
    pub campus: usize,
    pub budget_allocated: usize,
    pub vendor_name: usize,
    pub reliability_score: usize,
    pub expense_date: usize,
    pub amount: usize,
    pub category: usize,
}

impl SpendColumns {
    /// Locate every column by its (trimmed, lowercased) header name
    pub fn from_headers(headers: &StringRecord) -> PlacesResult<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_ascii_lowercase())
            .collect();
        let find = |name: &str| names.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                PlacesError::Validation(format!("Spend dataset is missing column '{}'", name))
            })
        };

        Ok(Self {
            project_id: find("project_id"),
            project_name: require("project_name")?,
            campus: require("campus")?,
            budget_allocated: require("budget_allocated")?,
            vendor_name: require("vendor_name")?,
            reliability_score: require("reliability_score")?,
            expense_date: require("expense_date")?,
            amount: require("amount")?,
            category: require("category")?,
        })
    }
}

/// Load every spend record from the dataset file
///
/// A missing dataset is an error: none of the spend panels can render
/// without it.
pub fn load_spend_records(path: &Path) -> PlacesResult<Vec<SpendRecord>> {
    if !path.exists() {
        return Err(PlacesError::file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| PlacesError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let records = parse_spend_csv(file)?;
    info!(
        path = %path.display(),
        rows = records.len(),
        "loaded spend dataset"
    );
    Ok(records)
}

/// Parse spend records from any CSV source with a header row
pub fn parse_spend_csv<R: Read>(source: R) -> PlacesResult<Vec<SpendRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let columns = SpendColumns::from_headers(reader.headers()?)?;
    debug!(?columns, "resolved spend dataset columns");

    let mut records = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = result
            .map_err(|e| PlacesError::Csv(format!("Error reading data row {}: {}", row, e)))?;
        records.push(parse_record(&record, &columns, row)?);
    }

    Ok(records)
}

fn parse_record(
    record: &StringRecord,
    columns: &SpendColumns,
    row: usize,
) -> PlacesResult<SpendRecord> {
    let field = |index: usize, name: &str| {
        record.get(index).ok_or_else(|| {
            PlacesError::Validation(format!("Row {}: missing value for '{}'", row, name))
        })
    };
    let text = |index: usize, name: &str| -> PlacesResult<String> {
        let value = field(index, name)?;
        if value.is_empty() {
            return Err(PlacesError::Validation(format!(
                "Row {}: '{}' must not be empty",
                row, name
            )));
        }
        Ok(value.to_string())
    };
    let money = |index: usize, name: &str| -> PlacesResult<Money> {
        let value = field(index, name)?;
        let amount = Money::parse(value).map_err(|e| {
            PlacesError::Validation(format!("Row {}: invalid '{}': {}", row, name, e))
        })?;
        if amount.is_negative() {
            return Err(PlacesError::Validation(format!(
                "Row {}: '{}' must not be negative, got {}",
                row, name, value
            )));
        }
        Ok(amount)
    };

    let score_text = field(columns.reliability_score, "reliability_score")?;
    let reliability_score = parse_score(score_text).ok_or_else(|| {
        PlacesError::Validation(format!(
            "Row {}: 'reliability_score' must be an integer 0-{}, got '{}'",
            row, MAX_RELIABILITY_SCORE, score_text
        ))
    })?;

    let date_text = field(columns.expense_date, "expense_date")?;
    let expense_date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|_| {
        PlacesError::Validation(format!(
            "Row {}: invalid 'expense_date' '{}'. Use YYYY-MM-DD",
            row, date_text
        ))
    })?;

    Ok(SpendRecord {
        project_id: columns
            .project_id
            .and_then(|i| record.get(i))
            .unwrap_or_default()
            .to_string(),
        project_name: text(columns.project_name, "project_name")?,
        campus: text(columns.campus, "campus")?,
        budget_allocated: money(columns.budget_allocated, "budget_allocated")?,
        vendor_name: text(columns.vendor_name, "vendor_name")?,
        reliability_score,
        expense_date,
        amount: money(columns.amount, "amount")?,
        category: text(columns.category, "category")?,
    })
}

/// Scores are integers; "87.0" as written by some exporters is accepted
fn parse_score(s: &str) -> Option<u8> {
    let s = s.strip_suffix(".0").unwrap_or(s);
    s.parse::<u8>()
        .ok()
        .filter(|score| *score <= MAX_RELIABILITY_SCORE)
}
