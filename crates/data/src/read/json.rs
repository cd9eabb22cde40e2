use std::collections::HashMap;
use std::io::Read;

use serde_json::Map;
use serde_json::Value;

use crate::error::DataError;
use crate::error::Result;
use crate::table::Cell;
use crate::table::Column;
use crate::table::Table;

pub(super) fn read<R: Read>(reader: R) -> Result<Table> {
    let document: Value = serde_json::from_reader(reader)?;

    match document {
        Value::Array(records) => from_records(records),
        Value::Object(columns) => from_columns(columns),
        _ => Err(DataError::UnsupportedShape),
    }
}

// [{"time": 0.0, "a": 1.0}, {"time": 1.0, "a": 2.0}]
fn from_records(records: Vec<Value>) -> Result<Table> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut columns: Vec<Column> = Vec::new();

    for (row, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            return Err(DataError::UnsupportedShape);
        };

        for (name, value) in fields {
            let cell = to_cell(value, &name, row)?;

            let position = match positions.get(&name) {
                Some(&position) => position,
                None => {
                    let position = columns.len();
                    columns.push(Column::new(name.clone(), vec![Cell::Null; row]));
                    positions.insert(name, position);
                    position
                }
            };

            columns[position].cells.push(cell);
        }

        for column in columns.iter_mut().filter(|c| c.cells.len() == row) {
            column.cells.push(Cell::Null);
        }
    }

    Table::new(columns)
}

// {"time": [0.0, 1.0], "a": [1.0, 2.0]} or {"time": {"0": 0.0, "1": 1.0}, ...}
fn from_columns(document: Map<String, Value>) -> Result<Table> {
    let mut columns = Vec::with_capacity(document.len());

    for (name, values) in document {
        let values: Vec<Value> = match values {
            Value::Array(values) => values,
            Value::Object(rows) => rows.into_iter().map(|(_, value)| value).collect(),
            _ => return Err(DataError::UnsupportedShape),
        };

        let cells = values
            .into_iter()
            .enumerate()
            .map(|(row, value)| to_cell(value, &name, row))
            .collect::<Result<Vec<Cell>>>()?;

        columns.push(Column::new(name, cells));
    }

    Table::new(columns)
}

fn to_cell(value: Value, column: &str, row: usize) -> Result<Cell> {
    let unsupported = || DataError::UnsupportedValue {
        column: column.to_owned(),
        row,
    };

    match value {
        Value::Null => Ok(Cell::Null),
        Value::Bool(b) => Ok(Cell::Number(b as u8 as f64)),
        Value::Number(n) => Ok(n.as_f64().map_or(Cell::Null, Cell::Number)),
        Value::String(s) => Ok(Cell::parse(&s)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Null => Ok(None),
                Value::Bool(b) => Ok(Some(b as u8 as f64)),
                Value::Number(n) => Ok(n.as_f64()),
                _ => Err(unsupported()),
            })
            .collect::<Result<Vec<Option<f64>>>>()
            .map(Cell::Array),
        Value::Object(_) => Err(unsupported()),
    }
}
