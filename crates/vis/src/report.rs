use std::path::Path;

use log::debug;
use log::info;
use tabvis_data::Dataset;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::layout::Page;
use crate::layout::PageLayout;
use crate::layout::PlotlyScript;
use crate::render::OutputFile;
use crate::render::OutputStream;
use crate::render::Render;

/// Generates the HTML report of a dataset.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::path::Path;
///
/// use tabvis_data::Dataset;
/// use tabvis_data::ReadOptions;
/// use tabvis_vis::Report;
/// use tabvis_vis::ReportConfig;
///
/// let table = tabvis_data::read_table(Path::new("run.csv"), &ReadOptions::default())?;
/// let dataset = Dataset::from_table(table, "time")?;
///
/// Report::new(ReportConfig::default()).write(&dataset, Path::new("report.html"))?;
/// # Ok(())
/// # }
/// ```
pub struct Report {
    config: ReportConfig,
}

impl Report {
    pub fn new(config: ReportConfig) -> Report {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Lays out the page of `dataset` without rendering it.
    pub fn page(&self, dataset: &Dataset) -> Result<Page> {
        let plotly = PlotlyScript::load(&self.config.plotly)?;
        let page = PageLayout::build(dataset, &self.config, plotly);

        debug!(
            "laid out {} charts in {} sections for the {} variant",
            page.chart_count(),
            page.sections.len(),
            page.variant
        );

        Ok(page)
    }

    pub fn render<O>(&self, dataset: &Dataset, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let page = self.page(dataset)?;
        page.render(output)?;
        output.flush()
    }

    /// Writes the report of `dataset` to the file at `path`, replacing it if
    /// it exists.
    pub fn write(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        let page = self.page(dataset)?;
        let mut output = OutputFile::create(path)?;

        page.render(&mut output)?;
        output.flush()?;

        info!(
            "wrote {} charts over {} time samples to `{}`",
            page.chart_count(),
            dataset.len(),
            path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotlySource;
    use crate::error::VisError;
    use std::path::PathBuf;
    use tabvis_data::Format;
    use tabvis_data::ReadOptions;
    use tabvis_data::read_table_from;

    #[test]
    fn render_report_from_csv() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let input = b"time,temperature [C],spectrum
0.0,20.0,\"[1, 2, 3]\"
0.5,21.0,\"[2, 3, 4]\"
";
        let table = read_table_from(&input[..], Format::Csv, &ReadOptions::default())?;
        let dataset = Dataset::from_table(table, "time")?;

        let mut html = String::new();
        Report::new(ReportConfig::default()).render(&dataset, &mut html)?;

        assert!(html.contains("https://cdn.plot.ly/plotly-2.27.0.min.js"));
        assert!(html.contains("<h1>Data Report</h1>"));
        assert!(html.contains(r#"<div id="plot_temperature__C_" class="time-series"></div>"#));
        assert!(html.contains(r#"<div id="plot_spectrum"></div>"#));
        assert!(html.contains(r#""label":"0.50""#));
        assert!(html.ends_with("</html>\n"));

        Ok(())
    }

    #[test]
    fn missing_plotly_file_is_an_error() {
        let config = ReportConfig {
            plotly: PlotlySource::Inline(PathBuf::from("/nonexistent/plotly.min.js")),
            ..ReportConfig::default()
        };
        let dataset = Dataset {
            time_column: String::from("time"),
            time: tabvis_data::TimeAxis::Numeric(vec![0.0]),
            series: Vec::new(),
            skipped: Vec::new(),
        };

        let mut html = String::new();
        let result = Report::new(config).render(&dataset, &mut html);

        assert!(matches!(result, Err(VisError::PlotlyScript { .. })));
        assert!(html.is_empty());
    }
}
