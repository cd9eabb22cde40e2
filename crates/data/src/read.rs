mod delimited;
mod json;

use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::DataError;
use crate::error::Result;
use crate::table::Table;

/// The supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Comma separated values.
    Csv,
    /// Tab separated values.
    Tsv,
    /// A JSON list of records or a JSON map of columns.
    Json,
}

impl Format {
    /// Derives the format from the file extension of `path`.
    pub fn from_path(path: &Path) -> Result<Format> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" | "txt" => Ok(Format::Csv),
            "tsv" | "tab" => Ok(Format::Tsv),
            "json" => Ok(Format::Json),
            _ => Err(DataError::UnknownFormat { extension }),
        }
    }

    fn default_delimiter(&self) -> u8 {
        match self {
            Format::Tsv => b'\t',
            Format::Csv | Format::Json => b',',
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Csv => write!(f, "CSV"),
            Format::Tsv => write!(f, "TSV"),
            Format::Json => write!(f, "JSON"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct ReadOptions {
    /// The input format. When not set it is derived from the file extension.
    pub format: Option<Format>,
    /// Overrides the field delimiter of delimited formats.
    pub delimiter: Option<u8>,
}

/// Reads the table stored at `path`.
pub fn read_table(path: &Path, options: &ReadOptions) -> Result<Table> {
    let format = match options.format {
        Some(format) => format,
        None => Format::from_path(path)?,
    };

    info!("reading {format} table from `{}`", path.display());

    let file = File::open(path)?;
    read_table_from(BufReader::new(file), format, options)
}

/// Reads a table in the given `format` from `reader`.
pub fn read_table_from<R: Read>(reader: R, format: Format, options: &ReadOptions) -> Result<Table> {
    let table = match format {
        Format::Csv | Format::Tsv => {
            let delimiter = options
                .delimiter
                .unwrap_or_else(|| format.default_delimiter());
            delimited::read(reader, delimiter)?
        }
        Format::Json => json::read(reader)?,
    };

    info!(
        "read {} columns and {} rows",
        table.columns().len(),
        table.row_count()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() -> Result<()> {
        assert_eq!(Format::from_path(Path::new("data.csv"))?, Format::Csv);
        assert_eq!(Format::from_path(Path::new("data.txt"))?, Format::Csv);
        assert_eq!(Format::from_path(Path::new("data.TSV"))?, Format::Tsv);
        assert_eq!(Format::from_path(Path::new("data.tab"))?, Format::Tsv);
        assert_eq!(Format::from_path(Path::new("dir/data.json"))?, Format::Json);
        assert!(matches!(
            Format::from_path(Path::new("data.parquet")),
            Err(DataError::UnknownFormat { extension }) if extension == "parquet"
        ));

        Ok(())
    }

    #[test]
    fn tsv_uses_tab_delimiter() -> Result<()> {
        let input = "time\tvalue\n0\t1\n1\t2\n".as_bytes();
        let table = read_table_from(input, Format::Tsv, &ReadOptions::default())?;

        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row_count(), 2);

        Ok(())
    }
}
