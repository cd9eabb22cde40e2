use std::error::Error;
use std::fmt::Display;

use tabvis_data::error::DataError;
use tabvis_vis::error::VisError;

#[derive(Debug)]
pub(crate) enum CliError {
    Data(DataError),
    Vis(VisError),
    Path(String),
}

impl From<DataError> for CliError {
    fn from(error: DataError) -> Self {
        CliError::Data(error)
    }
}

impl From<VisError> for CliError {
    fn from(error: VisError) -> Self {
        CliError::Vis(error)
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cli_error = "CLI error:";

        match self {
            CliError::Data(error) => write!(f, "{cli_error} {error}"),
            CliError::Vis(error) => write!(f, "{cli_error} {error}"),
            CliError::Path(error) => write!(f, "{cli_error} {error}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Data(error) => Some(error),
            CliError::Vis(error) => Some(error),
            CliError::Path(_) => None,
        }
    }
}
