use std::path::PathBuf;

use thiserror::Error;

/// Failures the pipeline recovers from locally: the driver reports them and
/// either re-prompts or treats the run as having no data.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("File '{}' not found.", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading CSV file '{}': {source}", path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{0}")]
    InvalidUserInput(String),

    #[error("Nothing to write to '{}': the table has no rows.", path.display())]
    EmptyResultWrite { path: PathBuf },

    #[error("Error writing to '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TableError {
    /// Map a `csv::Error` raised while writing to [`TableError::Io`] when it
    /// wraps an I/O failure, otherwise keep it as malformed data.
    pub(crate) fn from_csv(path: &std::path::Path, err: csv::Error) -> Self {
        let path = path.to_path_buf();
        if err.is_io_error() {
            TableError::Io {
                path,
                source: err.into(),
            }
        } else {
            TableError::MalformedInput { path, source: err }
        }
    }
}
