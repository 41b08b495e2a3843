use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use log::{debug, info};

use super::error::TableError;
use super::model::{Row, Table};

const UTF8_BOM: char = '\u{feff}';

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a comma-delimited file into a [`Table`].
///
/// The first record is the header; every later record becomes a [`Row`]
/// keyed by those names. Quoting follows RFC 4180 (embedded commas, quotes
/// and newlines). A leading UTF-8 byte-order mark is ignored. Records whose
/// field count differs from the header are rejected as malformed.
pub fn load_table(path: &Path) -> Result<Table, TableError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => TableError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TableError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let table = read_table(BufReader::new(file)).map_err(|e| TableError::from_csv(path, e))?;
    info!(
        "loaded {} rows x {} columns from {}",
        table.len(),
        table.headers.len(),
        path.display()
    );
    Ok(table)
}

/// Parse delimited text from any reader. The file handle (if any) is owned
/// by the reader and released when this returns.
pub fn read_table<R: Read>(source: R) -> Result<Table, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(UTF8_BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    debug!("header: {headers:?}");

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(Row::from_pairs(headers.iter().cloned().zip(record.iter())));
    }

    Ok(Table::new(headers, rows))
}
