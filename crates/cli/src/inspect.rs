use chrono::TimeDelta;
use tabvis_data::Dataset;
use tabvis_data::TimeAxis;

use crate::cli::InspectArgs;
use crate::error::CliError;
use crate::input::read_dataset;

const TIME_PRECISION: usize = 3;

pub(crate) fn run(args: InspectArgs) -> Result<(), CliError> {
    let dataset = read_dataset(&args.input)?;

    print!("{}", describe(&dataset));

    Ok(())
}

fn describe(dataset: &Dataset) -> String {
    let mut lines = Vec::with_capacity(dataset.series.len() + dataset.skipped.len() + 2);
    let last = dataset.len().saturating_sub(1);

    lines.push(format!(
        "time column `{}`: {} samples from {} to {}{}",
        dataset.time_column,
        dataset.len(),
        dataset.time.label(0, TIME_PRECISION),
        dataset.time.label(last, TIME_PRECISION),
        span(&dataset.time)
            .map(|span| format!(" ({})", format_span(span)))
            .unwrap_or_default(),
    ));

    let width = dataset
        .series
        .iter()
        .map(|s| s.column())
        .chain(dataset.skipped.iter().map(String::as_str))
        .map(str::len)
        .max()
        .unwrap_or(0);

    for series in &dataset.series {
        let unit = series
            .unit()
            .map(|unit| format!(" [{unit}]"))
            .unwrap_or_default();
        lines.push(format!("  {:<width$}  {}{unit}", series.column(), series.kind()));
    }

    for column in &dataset.skipped {
        lines.push(format!("  {column:<width$}  text (skipped)"));
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}

fn span(time: &TimeAxis) -> Option<TimeDelta> {
    match time {
        TimeAxis::DateTime(ts) => Some(*ts.last()? - *ts.first()?),
        TimeAxis::Numeric(_) => None,
    }
}

fn format_span(span: TimeDelta) -> String {
    let seconds = span.num_seconds();

    format!(
        "{}h {:02}m {:02}s",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )
}
