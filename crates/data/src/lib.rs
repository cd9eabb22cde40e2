//! [tabvis]'s data library.
//!
//! Reads a table with a time column and a mix of scalar and array-valued
//! columns, and turns it into series aligned to a shared time axis.
//!
//! [tabvis]: https://github.com/nelusnegur/tabvis

mod classify;
mod filter;
mod read;
mod series;
mod table;
mod time;

pub mod error;

use log::debug;
use log::warn;

use crate::error::DataError;
use crate::error::Result;

pub use crate::classify::ColumnKind;
pub use crate::classify::classify;
pub use crate::filter::SeriesFilter;
pub use crate::filter::TimeBound;
pub use crate::read::Format;
pub use crate::read::ReadOptions;
pub use crate::read::read_table;
pub use crate::read::read_table_from;
pub use crate::series::ArraySeries;
pub use crate::series::ScalarSeries;
pub use crate::series::Series;
pub use crate::series::label;
pub use crate::series::split_unit;
pub use crate::table::Cell;
pub use crate::table::Column;
pub use crate::table::Table;
pub use crate::time::TimeAxis;
pub use crate::time::parse_datetime;

/// The time axis and the series of a table, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub time_column: String,
    pub time: TimeAxis,
    pub series: Vec<Series>,
    /// The columns that could not be drawn.
    pub skipped: Vec<String>,
}

impl Dataset {
    pub fn from_table(table: Table, time_column: &str) -> Result<Dataset> {
        if table.column(time_column).is_none() {
            return Err(DataError::MissingTimeColumn {
                name: time_column.to_owned(),
            });
        }

        if table.row_count() == 0 {
            return Err(DataError::EmptyTable);
        }

        let mut time = None;
        let mut series = Vec::with_capacity(table.columns().len());
        let mut skipped = Vec::new();

        for column in table.into_columns() {
            if column.name == time_column {
                time = Some(TimeAxis::from_cells(&column.cells)?);
                continue;
            }

            let kind = classify(&column);
            debug!("the `{}` column is classified as {kind}", column.name);

            if kind == ColumnKind::Text {
                warn!("skipping the `{}` column, it does not hold numbers", column.name);
                skipped.push(column.name);
                continue;
            }

            series.push(Series::from_column(column, kind)?);
        }

        let time = time.ok_or_else(|| DataError::MissingTimeColumn {
            name: time_column.to_owned(),
        })?;

        Ok(Self {
            time_column: time_column.to_owned(),
            time,
            series,
            skipped,
        })
    }

    /// The number of time samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    pub fn scalars(&self) -> impl Iterator<Item = &ScalarSeries> {
        self.series.iter().filter_map(|s| match s {
            Series::Scalar(scalar) => Some(scalar),
            Series::Array(_) => None,
        })
    }

    pub fn arrays(&self) -> impl Iterator<Item = &ArraySeries> {
        self.series.iter().filter_map(|s| match s {
            Series::Array(array) => Some(array),
            Series::Scalar(_) => None,
        })
    }
}
