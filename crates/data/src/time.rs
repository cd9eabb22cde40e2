use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Timelike;
use chrono::Utc;

use crate::error::DataError;
use crate::error::Result;
use crate::table::Cell;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
];
const DATE_FORMAT: &str = "%Y-%m-%d";

// An f64 carries no more than 17 significant decimals.
const MAX_PRECISION: usize = 17;

/// The shared time axis every series of a dataset is aligned to.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeAxis {
    Numeric(Vec<f64>),
    DateTime(Vec<DateTime<Utc>>),
}

impl TimeAxis {
    /// Builds the time axis from the cells of the time column.
    ///
    /// The kind of the first cell decides the kind of the axis: numbers make a
    /// numeric axis and texts make a timestamp axis. Every other cell must be
    /// of the same kind.
    pub fn from_cells(cells: &[Cell]) -> Result<TimeAxis> {
        match cells.first() {
            None => Err(DataError::EmptyTable),
            Some(Cell::Number(_)) => cells
                .iter()
                .enumerate()
                .map(|(row, cell)| match cell {
                    Cell::Number(n) => Ok(*n),
                    _ => Err(DataError::InvalidTime { row }),
                })
                .collect::<Result<Vec<f64>>>()
                .map(TimeAxis::Numeric),
            Some(Cell::Text(_)) => cells
                .iter()
                .enumerate()
                .map(|(row, cell)| match cell {
                    Cell::Text(text) => parse_datetime(text).ok_or(DataError::InvalidTime { row }),
                    _ => Err(DataError::InvalidTime { row }),
                })
                .collect::<Result<Vec<DateTime<Utc>>>>()
                .map(TimeAxis::DateTime),
            Some(_) => Err(DataError::InvalidTime { row: 0 }),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TimeAxis::Numeric(ts) => ts.len(),
            TimeAxis::DateTime(ts) => ts.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, TimeAxis::DateTime(_))
    }

    /// Formats the time of the sample at `index` for display.
    ///
    /// Numeric times are printed with `precision` decimals, at most 17.
    pub fn label(&self, index: usize, precision: usize) -> String {
        let precision = precision.min(MAX_PRECISION);

        match self {
            TimeAxis::Numeric(ts) => ts
                .get(index)
                .map(|t| format!("{t:.precision$}"))
                .unwrap_or_default(),
            TimeAxis::DateTime(ts) => ts
                .get(index)
                .map(|t| {
                    if t.nanosecond() == 0 {
                        t.format("%Y-%m-%d %H:%M:%S").to_string()
                    } else {
                        t.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
                    }
                })
                .unwrap_or_default(),
        }
    }

    pub(crate) fn retain(self, mask: &[bool]) -> TimeAxis {
        match self {
            TimeAxis::Numeric(ts) => TimeAxis::Numeric(retain(ts, mask)),
            TimeAxis::DateTime(ts) => TimeAxis::DateTime(retain(ts, mask)),
        }
    }
}

/// Parses a timestamp written as RFC 3339 or as a naive date and time.
///
/// Naive values are taken as UTC.
pub fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.and_utc());
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

pub(crate) fn retain<T>(items: Vec<T>, mask: &[bool]) -> Vec<T> {
    items
        .into_iter()
        .zip(mask)
        .filter_map(|(item, &keep)| keep.then_some(item))
        .collect()
}
