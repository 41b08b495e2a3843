use chrono::NaiveDate;
use log::debug;

use super::model::{ColumnKind, Table};

// ---------------------------------------------------------------------------
// Classifier configuration
// ---------------------------------------------------------------------------

/// Tunables for column type sniffing.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Minimum share of rows that must parse as numbers.
    pub numeric_threshold: f64,
    /// `chrono` format used for both sniffing and filter bounds.
    pub date_format: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            numeric_threshold: 0.9,
            date_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl ClassifierConfig {
    pub fn parse_date(&self, value: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(value.trim(), &self.date_format).ok()
    }
}

/// Parse a trimmed value as `f64`. Empty strings never parse.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// A column is numeric when at least `numeric_threshold` of all rows hold a
/// parseable number. A table without rows has no numeric columns.
pub fn is_numeric_column(table: &Table, column: &str, config: &ClassifierConfig) -> bool {
    let total = table.len();
    if total == 0 {
        return false;
    }
    let numeric = table
        .rows
        .iter()
        .filter(|row| parse_number(row.value(column)).is_some())
        .count();
    numeric as f64 / total as f64 >= config.numeric_threshold
}

/// A column is a date column when its first non-empty value parses with
/// `date_format`. Later rows are never looked at.
pub fn is_date_column(table: &Table, column: &str, config: &ClassifierConfig) -> bool {
    table
        .rows
        .iter()
        .map(|row| row.value(column).trim())
        .find(|value| !value.is_empty())
        .is_some_and(|first| config.parse_date(first).is_some())
}

/// Numeric wins over Date, anything else is Categorical.
pub fn classify_column(table: &Table, column: &str, config: &ClassifierConfig) -> ColumnKind {
    let kind = if is_numeric_column(table, column, config) {
        ColumnKind::Numeric
    } else if is_date_column(table, column, config) {
        ColumnKind::Date
    } else {
        ColumnKind::Categorical
    };
    debug!("column '{column}' classified as {kind}");
    kind
}
