use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the CSV loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level error, including rows with inconsistent field counts.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input is not a usable table (empty header, duplicate column names).
    #[error("malformed input: {message}")]
    Malformed { message: String },

    /// A cell could not be converted into the column's inferred
    /// [`crate::types::DataType`].
    #[error("failed to parse value at row {row} column '{column}': {message} (raw='{raw}')")]
    ParseError {
        row: usize,
        column: String,
        raw: String,
        message: String,
    },
}
