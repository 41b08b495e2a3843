use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;

use super::error::TableError;
use super::model::Table;

/// Appended to whatever name the user types, even if it already ends in it.
pub const OUTPUT_EXTENSION: &str = ".csv";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// `out` → `out.csv`, `out.csv` → `out.csv.csv`.
pub fn output_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{name}{OUTPUT_EXTENSION}"))
}

/// Write `table` as UTF-8 (with byte-order mark) delimited text.
///
/// The header is the key order of the first row. Rows with that same key
/// order are written field by field, so repeated column names keep their own
/// values; any other row is looked up by name. An empty table has no header
/// to infer and is refused.
pub fn write_table(table: &Table, path: &Path) -> Result<(), TableError> {
    let Some(first) = table.rows.first() else {
        return Err(TableError::EmptyResultWrite {
            path: path.to_path_buf(),
        });
    };
    let io_err = |source| TableError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut sink = BufWriter::new(file);
    sink.write_all(UTF8_BOM).map_err(io_err)?;

    let header: Vec<&str> = first.keys().collect();
    let mut writer = csv::Writer::from_writer(sink);
    writer
        .write_record(&header)
        .map_err(|e| TableError::from_csv(path, e))?;
    for row in &table.rows {
        let written = if row.keys().eq(header.iter().copied()) {
            writer.write_record(row.values())
        } else {
            writer.write_record(header.iter().map(|column| row.value(column)))
        };
        written.map_err(|e| TableError::from_csv(path, e))?;
    }
    writer.flush().map_err(io_err)?;

    info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
