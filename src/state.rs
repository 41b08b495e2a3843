use log::warn;
use serde::Serialize;

use crate::data::classify::ClassifierConfig;
use crate::data::filter::filter_and_sort;
use crate::data::model::{FilterCriterion, FilterSpec, SortDirection, SortSpec, Table};

// ---------------------------------------------------------------------------
// Selection – everything the user chose, independent of the console
// ---------------------------------------------------------------------------

/// The full filter/sort request. Built by the console collector or directly
/// by library callers, then handed to [`crate::data::filter::filter_and_sort`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    /// Columns to filter on, in the order filters are applied.
    pub filter_columns: Vec<String>,

    /// Criterion per filter column.
    pub criteria: FilterSpec,

    /// Column whose raw string value orders the output.
    pub sort_column: String,

    /// Sort order token as typed (`asc` / `desc`); validated when sorting.
    pub sort_order: String,
}

impl Selection {
    /// Start a selection that only sorts.
    pub fn sorted_by(column: impl Into<String>, order: impl Into<String>) -> Self {
        Self {
            sort_column: column.into(),
            sort_order: order.into(),
            ..Default::default()
        }
    }

    /// Append a filter column together with its criterion.
    pub fn add_filter(&mut self, column: impl Into<String>, criterion: FilterCriterion) {
        let column = column.into();
        self.filter_columns.push(column.clone());
        self.criteria.insert(column, criterion);
    }

    /// Builder form of [`Selection::add_filter`].
    pub fn with_filter(mut self, column: impl Into<String>, criterion: FilterCriterion) -> Self {
        self.add_filter(column, criterion);
        self
    }

    /// Whether the typed sort order is one of the recognised tokens.
    pub fn has_known_sort_order(&self) -> bool {
        SortDirection::parse(&self.sort_order).is_some()
    }

    /// Resolve the sort request. Unknown order tokens fall back to ascending.
    pub fn sort_spec(&self) -> SortSpec {
        let direction = SortDirection::parse(&self.sort_order).unwrap_or_else(|| {
            warn!(
                "unknown sorting order '{}', defaulting to ascending",
                self.sort_order
            );
            SortDirection::Ascending
        });
        SortSpec {
            column: self.sort_column.clone(),
            direction,
        }
    }

    /// Run the filter/sort engine with this selection.
    pub fn apply(&self, table: &Table, config: &ClassifierConfig) -> Table {
        filter_and_sort(
            table,
            &self.filter_columns,
            &self.criteria,
            &self.sort_spec(),
            config,
        )
    }
}
