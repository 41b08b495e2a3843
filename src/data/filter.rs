use log::debug;

use super::classify::{ClassifierConfig, parse_number};
use super::model::{FilterCriterion, FilterSpec, Row, SortDirection, SortSpec, Table};

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// Whether `row` satisfies `criterion` on `column`.
///
/// * Numeric / date ranges are inclusive; values that are empty or do not
///   parse fail the test.
/// * Value sets compare the trimmed raw value, case-sensitively.
pub fn row_matches(
    row: &Row,
    column: &str,
    criterion: &FilterCriterion,
    config: &ClassifierConfig,
) -> bool {
    let value = row.value(column).trim();
    match criterion {
        FilterCriterion::RangeNumeric { min, max } => {
            parse_number(value).is_some_and(|v| *min <= v && v <= *max)
        }
        FilterCriterion::RangeDate { start, end } => {
            !value.is_empty() && config.parse_date(value).is_some_and(|d| *start <= d && d <= *end)
        }
        FilterCriterion::ValueSet { allowed } => allowed.contains(value),
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// One filter stage: a new table holding the rows that pass.
pub fn apply_filter(
    table: &Table,
    column: &str,
    criterion: &FilterCriterion,
    config: &ClassifierConfig,
) -> Table {
    let rows: Vec<Row> = table
        .rows
        .iter()
        .filter(|row| row_matches(row, column, criterion, config))
        .cloned()
        .collect();
    debug!(
        "filter on '{column}' kept {} of {} rows",
        rows.len(),
        table.len()
    );
    table.with_rows(rows)
}

/// Apply the criteria of `filter_columns` in order, each stage narrowing the
/// previous one. Columns without a criterion are skipped.
pub fn filter_rows(
    table: &Table,
    filter_columns: &[String],
    criteria: &FilterSpec,
    config: &ClassifierConfig,
) -> Table {
    filter_columns
        .iter()
        .filter_map(|column| criteria.get(column).map(|c| (column, c)))
        .fold(table.clone(), |current, (column, criterion)| {
            apply_filter(&current, column, criterion, config)
        })
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Stable sort by the raw string value of the sort column, whatever its
/// inferred kind. Ties keep their input order in both directions.
pub fn sort_rows(table: &Table, sort: &SortSpec) -> Table {
    let mut rows = table.rows.clone();
    let column = sort.column.as_str();
    match sort.direction {
        SortDirection::Ascending => rows.sort_by(|a, b| a.value(column).cmp(b.value(column))),
        SortDirection::Descending => rows.sort_by(|a, b| b.value(column).cmp(a.value(column))),
    }
    table.with_rows(rows)
}

/// Filter then sort. The input table is never modified.
pub fn filter_and_sort(
    table: &Table,
    filter_columns: &[String],
    criteria: &FilterSpec,
    sort: &SortSpec,
    config: &ClassifierConfig,
) -> Table {
    let filtered = filter_rows(table, filter_columns, criteria, config);
    sort_rows(&filtered, sort)
}
