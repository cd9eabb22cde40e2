use std::collections::HashSet;

use crate::error::DataError;
use crate::error::Result;

const MISSING_MARKERS: [&str; 7] = ["", "nan", "NaN", "null", "None", "NA", "<NA>"];

/// A single value of a table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Number(f64),
    Text(String),
    Array(Vec<Option<f64>>),
}

impl Cell {
    /// Parses a textual cell.
    ///
    /// Numbers become [`Cell::Number`], the usual missing value markers become
    /// [`Cell::Null`] and bracketed lists such as `[1, 2, 3]` or `[1. 2. 3.]`
    /// become [`Cell::Array`]. Everything else is kept as [`Cell::Text`].
    pub fn parse(text: &str) -> Cell {
        let trimmed = text.trim();

        if is_missing(trimmed) {
            return Cell::Null;
        }

        if let Ok(number) = trimmed.parse::<f64>() {
            return if number.is_nan() {
                Cell::Null
            } else {
                Cell::Number(number)
            };
        }

        if let Some(inner) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if let Some(items) = parse_array(inner) {
                return Cell::Array(items);
            }
        }

        Cell::Text(text.to_owned())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

fn is_missing(text: &str) -> bool {
    MISSING_MARKERS.contains(&text)
}

fn parse_array(inner: &str) -> Option<Vec<Option<f64>>> {
    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|item| !item.is_empty())
        .map(|item| {
            if is_missing(item) {
                Some(None)
            } else {
                item.parse::<f64>()
                    .ok()
                    .map(|n| if n.is_nan() { None } else { Some(n) })
            }
        })
        .collect()
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Column {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// A table of equally long, uniquely named columns kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Table> {
        let mut names = HashSet::with_capacity(columns.len());
        let expected = columns.first().map_or(0, |c| c.cells.len());

        for column in &columns {
            if !names.insert(column.name.as_str()) {
                return Err(DataError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }

            if column.cells.len() != expected {
                return Err(DataError::ColumnLength {
                    name: column.name.clone(),
                    expected,
                    found: column.cells.len(),
                });
            }
        }

        Ok(Self { columns })
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<Column> {
        self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scalars_and_missing_values() {
        assert_eq!(Cell::parse("1.5"), Cell::Number(1.5));
        assert_eq!(Cell::parse(" -3 "), Cell::Number(-3.0));
        assert_eq!(Cell::parse(""), Cell::Null);
        assert_eq!(Cell::parse("NaN"), Cell::Null);
        assert_eq!(Cell::parse("None"), Cell::Null);
        assert_eq!(Cell::parse("idle"), Cell::Text(String::from("idle")));
    }

    #[test]
    fn parse_list_and_numpy_arrays() {
        let expected = Cell::Array(vec![Some(1.0), Some(2.0), Some(3.0)]);

        assert_eq!(Cell::parse("[1, 2, 3]"), expected);
        assert_eq!(Cell::parse("[1. 2. 3.]"), expected);
        assert_eq!(Cell::parse("[ 1.0,2.0 ,  3.0 ]"), expected);
        assert_eq!(
            Cell::parse("[1, nan, 3]"),
            Cell::Array(vec![Some(1.0), None, Some(3.0)])
        );
        assert_eq!(Cell::parse("[]"), Cell::Array(Vec::new()));
    }

    #[test]
    fn parse_array_with_text_item_is_text() {
        assert_eq!(
            Cell::parse("[a, b]"),
            Cell::Text(String::from("[a, b]"))
        );
    }

    #[test]
    fn table_rejects_duplicate_columns() {
        let columns = vec![
            Column::new("a", vec![Cell::Null]),
            Column::new("a", vec![Cell::Null]),
        ];

        assert!(matches!(
            Table::new(columns),
            Err(DataError::DuplicateColumn { name }) if name == "a"
        ));
    }

    #[test]
    fn table_rejects_uneven_columns() {
        let columns = vec![
            Column::new("a", vec![Cell::Null, Cell::Null]),
            Column::new("b", vec![Cell::Null]),
        ];

        assert!(matches!(
            Table::new(columns),
            Err(DataError::ColumnLength { expected: 2, found: 1, .. })
        ));
    }
}
