use std::fmt::Display;

use crate::table::Cell;
use crate::table::Column;

/// How a column is drawn in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// One value per time sample, drawn as a time series.
    Scalar,
    /// One array of `len` values per time sample, drawn against the array index.
    Array { len: usize },
    /// Text that cannot be drawn.
    Text,
}

impl Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Scalar => write!(f, "scalar"),
            ColumnKind::Array { len } => write!(f, "array[{len}]"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}

/// Classifies a column by its first non-null cell.
///
/// Arrays of more than one item make an array column. Single item arrays,
/// numbers and all-null columns are scalars.
pub fn classify(column: &Column) -> ColumnKind {
    match column.cells.iter().find(|cell| !cell.is_null()) {
        Some(Cell::Array(items)) if items.len() > 1 => ColumnKind::Array { len: items.len() },
        Some(Cell::Text(_)) => ColumnKind::Text,
        Some(Cell::Array(_)) | Some(Cell::Number(_)) | Some(Cell::Null) | None => {
            ColumnKind::Scalar
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_first_value() {
        let array = Column::new(
            "a",
            vec![Cell::Null, Cell::Array(vec![Some(1.0), Some(2.0)])],
        );
        let single = Column::new("b", vec![Cell::Array(vec![Some(1.0)])]);
        let number = Column::new("c", vec![Cell::Number(1.0)]);
        let text = Column::new("d", vec![Cell::Text(String::from("on"))]);
        let empty = Column::new("e", vec![Cell::Null, Cell::Null]);

        assert_eq!(classify(&array), ColumnKind::Array { len: 2 });
        assert_eq!(classify(&single), ColumnKind::Scalar);
        assert_eq!(classify(&number), ColumnKind::Scalar);
        assert_eq!(classify(&text), ColumnKind::Text);
        assert_eq!(classify(&empty), ColumnKind::Scalar);
    }

    #[test]
    fn display_kinds() {
        assert_eq!(ColumnKind::Array { len: 16 }.to_string(), "array[16]");
        assert_eq!(ColumnKind::Scalar.to_string(), "scalar");
    }
}
