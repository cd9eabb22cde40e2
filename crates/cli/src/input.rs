use tabvis_data::Dataset;
use tabvis_data::ReadOptions;
use tabvis_data::read_table;

use crate::cli::InputArgs;
use crate::error::CliError;

/// Reads the input table and splits it into series along its time column.
pub(crate) fn read_dataset(args: &InputArgs) -> Result<Dataset, CliError> {
    let options = ReadOptions {
        format: args.format.map(Into::into),
        delimiter: args.delimiter,
    };

    let table = read_table(&args.input, &options)?;
    let dataset = Dataset::from_table(table, &args.time_column)?;

    Ok(dataset)
}
