use crate::classify::ColumnKind;
use crate::error::DataError;
use crate::error::Result;
use crate::table::Cell;
use crate::table::Column;
use crate::time::retain;

/// A column of single values, one per time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarSeries {
    pub column: String,
    pub name: String,
    pub unit: Option<String>,
    pub values: Vec<Option<f64>>,
}

/// A column of fixed-length arrays, one frame per time sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySeries {
    pub column: String,
    pub name: String,
    pub unit: Option<String>,
    pub len: usize,
    pub frames: Vec<Vec<Option<f64>>>,
}

impl ArraySeries {
    /// Returns the smallest and the largest finite sample across all frames.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.frames
            .iter()
            .flatten()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |range, v| match range {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Series {
    Scalar(ScalarSeries),
    Array(ArraySeries),
}

impl Series {
    pub(crate) fn from_column(column: Column, kind: ColumnKind) -> Result<Series> {
        let (name, unit) = split_unit(&column.name);

        match kind {
            ColumnKind::Array { len } => {
                let frames = column
                    .cells
                    .into_iter()
                    .enumerate()
                    .map(|(row, cell)| match cell {
                        Cell::Null => Ok(vec![None; len]),
                        Cell::Array(items) if items.len() == len => Ok(items),
                        Cell::Array(items) => Err(DataError::RaggedArray {
                            column: column.name.clone(),
                            row,
                            expected: len,
                            found: items.len(),
                        }),
                        Cell::Number(_) | Cell::Text(_) => Err(DataError::InvalidCell {
                            column: column.name.clone(),
                            row,
                        }),
                    })
                    .collect::<Result<Vec<Vec<Option<f64>>>>>()?;

                Ok(Series::Array(ArraySeries {
                    column: column.name,
                    name,
                    unit,
                    len,
                    frames,
                }))
            }
            ColumnKind::Text => Err(DataError::TextColumn { name: column.name }),
            ColumnKind::Scalar => {
                let values = column
                    .cells
                    .into_iter()
                    .enumerate()
                    .map(|(row, cell)| match cell {
                        Cell::Null => Ok(None),
                        Cell::Number(n) => Ok(Some(n)),
                        Cell::Array(items) if items.len() <= 1 => {
                            Ok(items.first().copied().flatten())
                        }
                        Cell::Array(_) | Cell::Text(_) => Err(DataError::InvalidCell {
                            column: column.name.clone(),
                            row,
                        }),
                    })
                    .collect::<Result<Vec<Option<f64>>>>()?;

                Ok(Series::Scalar(ScalarSeries {
                    column: column.name,
                    name,
                    unit,
                    values,
                }))
            }
        }
    }

    /// The name of the source column.
    pub fn column(&self) -> &str {
        match self {
            Series::Scalar(s) => &s.column,
            Series::Array(s) => &s.column,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Series::Scalar(s) => &s.name,
            Series::Array(s) => &s.name,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            Series::Scalar(s) => s.unit.as_deref(),
            Series::Array(s) => s.unit.as_deref(),
        }
    }

    /// The series name followed by its unit in brackets, if it has one.
    pub fn label(&self) -> String {
        label(self.name(), self.unit())
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Series::Scalar(_) => ColumnKind::Scalar,
            Series::Array(s) => ColumnKind::Array { len: s.len },
        }
    }

    pub(crate) fn retain(self, mask: &[bool]) -> Series {
        match self {
            Series::Scalar(s) => Series::Scalar(ScalarSeries {
                values: retain(s.values, mask),
                ..s
            }),
            Series::Array(s) => Series::Array(ArraySeries {
                frames: retain(s.frames, mask),
                ..s
            }),
        }
    }
}

pub fn label(name: &str, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{name} [{unit}]"),
        None => name.to_owned(),
    }
}

/// Splits a trailing `[unit]` or `(unit)` off a column name.
pub fn split_unit(column: &str) -> (String, Option<String>) {
    let trimmed = column.trim_end();

    for (open, close) in [('[', ']'), ('(', ')')] {
        let Some(rest) = trimmed.strip_suffix(close) else {
            continue;
        };

        if let Some(start) = rest.rfind(open) {
            let name = rest[..start].trim_end();
            let unit = rest[start + 1..].trim();

            if !name.is_empty() && !unit.is_empty() {
                return (name.to_owned(), Some(unit.to_owned()));
            }
        }
    }

    (column.to_owned(), None)
}
