//! Defines the `Error` and `Result` types that this crate uses.

use std::error::Error;
use std::fmt::Display;
use std::io::Error as IoError;
use std::path::PathBuf;

use serde_json::Error as JsonError;
use tinytemplate::error::Error as TinyTemplateError;

/// The result type that uses [VisError] as the error type.
pub type Result<T> = std::result::Result<T, VisError>;

/// The error type for generating a report.
#[derive(Debug)]
#[non_exhaustive]
pub enum VisError {
    /// A [std::io::Error] encountered while writing the report.
    Io(IoError),

    /// A [tinytemplate::error::Error] encountered while parsing or rendering
    /// the page template.
    TemplateError(TinyTemplateError),

    /// A [serde_json::Error] encountered while serializing chart specs.
    JsonSerialization(JsonError),

    /// The local plotly.js file to inline into the page could not be read.
    PlotlyScript { path: PathBuf, error: IoError },
}

impl Error for VisError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisError::Io(error) => Some(error),
            VisError::TemplateError(error) => Some(error),
            VisError::JsonSerialization(error) => Some(error),
            VisError::PlotlyScript { error, .. } => Some(error),
        }
    }
}

impl Display for VisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vis_error = "vis error:";

        match self {
            VisError::Io(error) => write!(f, "{vis_error} I/O error: {error}"),
            VisError::TemplateError(error) => write!(f, "{vis_error} template error: {error}"),
            VisError::JsonSerialization(error) => {
                write!(f, "{vis_error} chart serialization error: {error}")
            }
            VisError::PlotlyScript { path, error } => write!(
                f,
                "{vis_error} could not read the plotly.js file `{}`: {error}",
                path.display()
            ),
        }
    }
}

impl From<TinyTemplateError> for VisError {
    fn from(error: TinyTemplateError) -> Self {
        VisError::TemplateError(error)
    }
}

impl From<IoError> for VisError {
    fn from(error: IoError) -> Self {
        VisError::Io(error)
    }
}

impl From<JsonError> for VisError {
    fn from(error: JsonError) -> Self {
        VisError::JsonSerialization(error)
    }
}
