use std::path::Path;

use log::info;
use tabvis_data::SeriesFilter;
use tabvis_vis::PlotlySource;
use tabvis_vis::Report;
use tabvis_vis::ReportConfig;

use crate::cli::ReportArgs;
use crate::error::CliError;
use crate::input::read_dataset;

pub(crate) fn run(args: ReportArgs) -> Result<(), CliError> {
    check_output_path(&args.output)?;

    let dataset = read_dataset(&args.input)?;
    let filter = SeriesFilter::new(args.include, args.exclude, args.start, args.end);
    let dataset = dataset.filter(&filter)?;

    info!(
        "drawing {} series over {} samples",
        dataset.series.len(),
        dataset.len()
    );

    let plotly = match (args.plotly_js, args.plotly_url) {
        (Some(path), _) => PlotlySource::Inline(path),
        (None, Some(url)) => PlotlySource::Cdn(url),
        (None, None) => PlotlySource::default(),
    };

    let config = ReportConfig {
        title: args.title,
        variant: args.variant.into(),
        plotly,
        frame_duration_ms: args.frame_duration,
        time_precision: usize::from(args.precision),
    };

    Report::new(config).write(&dataset, &args.output)?;

    println!("Saved to {}", args.output.display());

    Ok(())
}

fn check_output_path(output: &Path) -> Result<(), CliError> {
    if output.is_dir() {
        return Err(CliError::Path(format!(
            "The `{}` output path points to a directory.",
            output.display()
        )));
    }

    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(CliError::Path(format!(
                "The `{}` directory does not exist.",
                parent.display()
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_in_current_directory_is_accepted() {
        assert!(check_output_path(Path::new("report.html")).is_ok());
    }

    #[test]
    fn output_in_missing_directory_is_rejected() {
        let result = check_output_path(Path::new("missing-directory/report.html"));

        assert!(matches!(result, Err(CliError::Path(_))));
    }

    #[test]
    fn output_pointing_at_directory_is_rejected() {
        assert!(matches!(
            check_output_path(Path::new("src")),
            Err(CliError::Path(_))
        ));
    }
}
