use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Row – one record of the table
// ---------------------------------------------------------------------------

/// A single record: column name → raw string value, in header order.
///
/// Kept as an ordered list of pairs rather than a map so that the writer can
/// reproduce the column order of the first row exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// Zip header names with the values of one record.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Row {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for `column`, if the row has it.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Raw value for `column`, treating a missing field as empty.
    pub fn value(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    /// Column names in this row's order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Raw values in this row's order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Table – the complete in-memory dataset
// ---------------------------------------------------------------------------

/// Ordered rows plus the header they were loaded with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names as declared by the header line.
    pub headers: Vec<String>,
    /// Rows in file order.
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Table { headers, rows }
    }

    /// Same header, different rows. Used by every filter stage.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Table {
            headers: self.headers.clone(),
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows (a header alone does not count).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct raw values of a column, sorted.
    pub fn unique_values(&self, column: &str) -> BTreeSet<&str> {
        self.rows.iter().map(|row| row.value(column)).collect()
    }
}

// ---------------------------------------------------------------------------
// ColumnKind – inferred semantic type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Date,
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::Numeric => write!(f, "numeric"),
            ColumnKind::Date => write!(f, "date"),
            ColumnKind::Categorical => write!(f, "categorical"),
        }
    }
}

// ---------------------------------------------------------------------------
// Filter / sort criteria
// ---------------------------------------------------------------------------

/// Per-column predicate used to narrow rows. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterCriterion {
    RangeNumeric { min: f64, max: f64 },
    RangeDate { start: NaiveDate, end: NaiveDate },
    ValueSet { allowed: BTreeSet<String> },
}

/// Column name → criterion.
pub type FilterSpec = BTreeMap<String, FilterCriterion>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Recognise `asc` / `desc` (case-insensitive, surrounding whitespace
    /// ignored).
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortDirection::Ascending),
            "desc" => Some(SortDirection::Descending),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub column: String,
    pub direction: SortDirection,
}
