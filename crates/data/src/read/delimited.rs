use std::io::Read;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::table::Cell;
use crate::table::Column;
use crate::table::Table;

pub(super) fn read<R: Read>(reader: R, delimiter: u8) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let mut columns: Vec<Column> = reader
        .headers()?
        .iter()
        .map(|name| Column::new(name, Vec::new()))
        .collect();

    for record in reader.records() {
        let record = record?;

        for (column, field) in columns.iter_mut().zip(record.iter()) {
            column.cells.push(Cell::parse(field));
        }
    }

    // Dataframe exports write the row index as a leading column without a name.
    if columns.first().is_some_and(|column| column.name.is_empty()) {
        columns.remove(0);
    }

    Table::new(columns)
}
