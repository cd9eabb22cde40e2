use serde::Serialize;

use crate::error::Result;
use crate::layout::Page;
use crate::layout::PlotlyScript;
use crate::layout::Section;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::escape_script;
use crate::render::script::SYNC_ZOOM_SCRIPT;
use crate::template::TemplateEngine;

#[derive(Serialize)]
struct PageContext<'a> {
    title: &'a str,
    plotly_src: Option<&'a str>,
    plotly_inline: Option<String>,
    sidebar: bool,
    sections: Vec<SectionContext<'a>>,
    script: Option<&'static str>,
}

#[derive(Serialize)]
struct SectionContext<'a> {
    id: &'a str,
    title: &'a str,
    charts: Vec<ChartContext<'a>>,
}

#[derive(Serialize)]
struct ChartContext<'a> {
    id: &'a str,
    title: &'a str,
    html: String,
}

impl<'a> SectionContext<'a> {
    fn new(section: &'a Section) -> Result<SectionContext<'a>> {
        let charts = section
            .charts
            .iter()
            .map(|chart| {
                let mut html = String::new();
                chart.render(&mut html)?;

                Ok(ChartContext {
                    id: chart.id.as_str(),
                    title: &chart.title,
                    html,
                })
            })
            .collect::<Result<Vec<ChartContext>>>()?;

        Ok(Self {
            id: section.id,
            title: section.title,
            charts,
        })
    }
}

impl Render for Page {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let (plotly_src, plotly_inline) = match &self.plotly {
            PlotlyScript::Src(url) => (Some(url.as_str()), None),
            PlotlyScript::Inline(code) => (None, Some(escape_script(code))),
        };

        let sections = self
            .sections
            .iter()
            .map(SectionContext::new)
            .collect::<Result<Vec<SectionContext>>>()?;

        let context = PageContext {
            title: &self.title,
            plotly_src,
            plotly_inline,
            sidebar: self.variant.has_sidebar(),
            sections,
            script: self.variant.links_zoom().then_some(SYNC_ZOOM_SCRIPT),
        };

        let engine = TemplateEngine::new()?;
        let text = engine.render(&context)?;

        output.write(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::config::Variant;
    use crate::layout::PageLayout;
    use tabvis_data::Dataset;
    use tabvis_data::ScalarSeries;
    use tabvis_data::Series;
    use tabvis_data::TimeAxis;

    fn dataset() -> Dataset {
        let scalar = |column: &str| {
            Series::Scalar(ScalarSeries {
                column: column.to_owned(),
                name: column.to_owned(),
                unit: None,
                values: vec![Some(1.0), Some(2.0)],
            })
        };

        Dataset {
            time_column: String::from("time"),
            time: TimeAxis::Numeric(vec![0.0, 1.0]),
            series: vec![scalar("cpu"), scalar("mem <rss>")],
            skipped: Vec::new(),
        }
    }

    fn render(variant: Variant, plotly: PlotlyScript) -> Result<String> {
        let config = ReportConfig {
            title: String::from("Bench & Co"),
            variant,
            ..ReportConfig::default()
        };
        let page = PageLayout::build(&dataset(), &config, plotly);

        let mut html = String::new();
        page.render(&mut html)?;
        Ok(html)
    }

    #[test]
    fn basic_page() -> Result<()> {
        let html = render(
            Variant::Basic,
            PlotlyScript::Src(String::from("plotly-2.27.0.min.js")),
        )?;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Bench &amp; Co</title>"));
        assert!(html.contains(r#"<script src="plotly-2.27.0.min.js" charset="utf-8"></script>"#));
        assert!(html.contains("body { font-family: Arial, sans-serif;"));
        assert!(html.contains(r#"<h2 id="time-series">Metrics Over Time</h2>"#));
        assert!(!html.contains("Array Data"));
        assert!(html.contains(r#"<div id="plot_cpu"></div>"#));
        assert!(!html.contains(r#"class="sidebar""#));
        assert!(!html.contains("plotly_relayout"));

        Ok(())
    }

    #[test]
    fn sidebar_page_links_every_chart() -> Result<()> {
        let html = render(Variant::Sidebar, PlotlyScript::Src(String::from("plotly.js")))?;

        assert!(html.contains(r#"<nav class="sidebar">"#));
        assert!(html.contains(r##"<a href="#plot_cpu">cpu</a>"##));
        assert!(html.contains(r##"<a href="#plot_mem__rss_">mem &lt;rss&gt;</a>"##));
        assert!(!html.contains("plotly_relayout"));

        Ok(())
    }

    #[test]
    fn linked_page_synchronizes_zoom() -> Result<()> {
        let html = render(Variant::Linked, PlotlyScript::Src(String::from("plotly.js")))?;

        assert!(html.contains(r#"<nav class="sidebar">"#));
        assert!(html.contains(r#"<div id="plot_cpu" class="time-series"></div>"#));
        assert!(html.contains("source.on('plotly_relayout'"));

        Ok(())
    }

    #[test]
    fn markup_in_column_names_stays_inside_the_script() -> Result<()> {
        let dataset = Dataset {
            series: vec![Series::Scalar(ScalarSeries {
                column: String::from("<!--<script>"),
                name: String::from("<!--<script>"),
                unit: None,
                values: vec![Some(1.0), Some(2.0)],
            })],
            ..dataset()
        };
        let page = PageLayout::build(
            &dataset,
            &ReportConfig::default(),
            PlotlyScript::Src(String::from("plotly.js")),
        );

        let mut html = String::new();
        page.render(&mut html)?;

        assert!(html.contains(r#""title":{"text":"\u003c!--\u003cscript\u003e"}"#));
        assert!(!html.contains("<!--<script>"));

        Ok(())
    }

    #[test]
    fn inline_plotly_is_embedded() -> Result<()> {
        let code = String::from("window.Plotly = {}; // </script>");
        let html = render(Variant::Basic, PlotlyScript::Inline(code))?;

        assert!(html.contains(r#"<script>window.Plotly = {}; // <\/script></script>"#));
        assert!(!html.contains("<script src="));

        Ok(())
    }
}
