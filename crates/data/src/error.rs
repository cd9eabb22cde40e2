//! Defines the `DataError` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io;
use std::sync::Arc;

/// The result type that uses [DataError] as the error type.
pub type Result<T> = std::result::Result<T, DataError>;

/// The error type for reading and classifying tabular data.
///
/// Errors originate either from reading the input (I/O, CSV and JSON decoding)
/// or from a table whose shape cannot be turned into time-aligned series.
#[derive(Debug, Clone)]
pub enum DataError {
    /// A [`std::io::Error`] encountered while reading the input.
    Io(Arc<io::Error>),

    /// A [`csv::Error`] encountered while decoding CSV records.
    Csv(Arc<csv::Error>),

    /// A [`serde_json::Error`] encountered while decoding a JSON document.
    Json(Arc<serde_json::Error>),

    /// The input format could not be derived from the file extension.
    UnknownFormat { extension: String },

    /// The JSON document is neither a list of records nor a map of columns.
    UnsupportedShape,

    /// A JSON value that cannot be represented as a table cell.
    UnsupportedValue { column: String, row: usize },

    /// Two columns with the same name.
    DuplicateColumn { name: String },

    /// A column whose length differs from the other columns.
    ColumnLength {
        name: String,
        expected: usize,
        found: usize,
    },

    /// The time column is not part of the table.
    MissingTimeColumn { name: String },

    /// The table has no rows, or none are left after filtering.
    EmptyTable,

    /// A time value that is neither a number nor a timestamp, or a time
    /// column that mixes both.
    InvalidTime { row: usize },

    /// A cell whose shape does not match the kind of its column.
    InvalidCell { column: String, row: usize },

    /// A text column used where a drawable series is expected.
    TextColumn { name: String },

    /// An array cell whose length differs from the first array of its column.
    RaggedArray {
        column: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A time window bound whose kind does not match the time axis.
    TimeBoundMismatch,
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let data_error = "data error:";

        match self {
            DataError::Io(error) => write!(f, "{data_error} I/O error: {error}"),
            DataError::Csv(error) => write!(f, "{data_error} CSV error: {error}"),
            DataError::Json(error) => write!(f, "{data_error} JSON error: {error}"),
            DataError::UnknownFormat { extension } => write!(
                f,
                "{data_error} unknown input format for the \"{extension}\" extension"
            ),
            DataError::UnsupportedShape => write!(
                f,
                "{data_error} the JSON document must be a list of records or a map of columns"
            ),
            DataError::UnsupportedValue { column, row } => write!(
                f,
                "{data_error} unsupported value in the \"{column}\" column at row {row}"
            ),
            DataError::DuplicateColumn { name } => {
                write!(f, "{data_error} the \"{name}\" column appears more than once")
            }
            DataError::ColumnLength {
                name,
                expected,
                found,
            } => write!(
                f,
                "{data_error} the \"{name}\" column has {found} rows, expected {expected}"
            ),
            DataError::MissingTimeColumn { name } => {
                write!(f, "{data_error} the \"{name}\" time column could not be found")
            }
            DataError::EmptyTable => write!(f, "{data_error} the table has no rows"),
            DataError::InvalidTime { row } => {
                write!(f, "{data_error} invalid time value at row {row}")
            }
            DataError::InvalidCell { column, row } => write!(
                f,
                "{data_error} the value in the \"{column}\" column at row {row} does not match the column kind"
            ),
            DataError::TextColumn { name } => write!(
                f,
                "{data_error} the \"{name}\" column holds text and cannot be drawn"
            ),
            DataError::RaggedArray {
                column,
                row,
                expected,
                found,
            } => write!(
                f,
                "{data_error} the array in the \"{column}\" column at row {row} has {found} items, expected {expected}"
            ),
            DataError::TimeBoundMismatch => write!(
                f,
                "{data_error} the time window bounds do not match the kind of the time axis"
            ),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DataError::Io(error) => Some(error),
            DataError::Csv(error) => Some(error),
            DataError::Json(error) => Some(error),
            _ => None,
        }
    }
}

impl From<io::Error> for DataError {
    fn from(error: io::Error) -> Self {
        DataError::Io(Arc::new(error))
    }
}

impl From<csv::Error> for DataError {
    fn from(error: csv::Error) -> Self {
        DataError::Csv(Arc::new(error))
    }
}

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        DataError::Json(Arc::new(error))
    }
}
