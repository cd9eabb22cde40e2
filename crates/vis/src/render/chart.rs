use crate::chart::Chart;
use crate::chart::ChartKind;
use crate::error::Result;
use crate::render::OutputStream;
use crate::render::Render;
use crate::render::script_json;

const LINKED_CLASS: &str = r#" class="time-series""#;

impl Render for Chart {
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream,
    {
        let id = &self.id;
        let data = script_json(&self.spec.data)?;
        let layout = script_json(&self.spec.layout)?;
        let class = if self.linked { LINKED_CLASS } else { "" };

        match self.kind {
            ChartKind::TimeSeries => output.write(&format!(
                r#"
    <div class="plot-container">
        <div id="{id}"{class}></div>
        <script>
            Plotly.newPlot('{id}', {data}, {layout});
        </script>
    </div>
"#,
            )),
            ChartKind::Array => {
                let frames = script_json(&self.spec.frames)?;

                output.write(&format!(
                    r#"
    <div class="plot-container">
        <div id="{id}"{class}></div>
        <script>
            (function() {{
                Plotly.newPlot('{id}', {data}, {layout}).then(function() {{
                    Plotly.addFrames('{id}', {frames});
                }});
            }})();
        </script>
    </div>
"#,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::id::IdGenerator;
    use crate::layout::ChartLayout;
    use tabvis_data::ArraySeries;
    use tabvis_data::ScalarSeries;
    use tabvis_data::TimeAxis;

    #[test]
    fn render_time_series_chart() -> Result<()> {
        let series = ScalarSeries {
            column: String::from("cpu"),
            name: String::from("cpu"),
            unit: None,
            values: vec![Some(1.0), Some(2.0)],
        };
        let time = TimeAxis::Numeric(vec![0.0, 1.0]);
        let mut chart = ChartLayout::scalar(IdGenerator::new().issue("cpu"), &series, &time);
        chart.linked = true;

        let mut html = String::new();
        chart.render(&mut html)?;

        assert!(html.contains(r#"<div id="plot_cpu" class="time-series"></div>"#));
        assert!(html.contains(r#"Plotly.newPlot('plot_cpu', [{"type":"scatter","x":[0.0,1.0],"y":[1.0,2.0]"#));
        assert!(!html.contains("addFrames"));

        Ok(())
    }

    #[test]
    fn render_array_chart_with_frames() -> Result<()> {
        let series = ArraySeries {
            column: String::from("spectrum"),
            name: String::from("spectrum"),
            unit: None,
            len: 2,
            frames: vec![vec![Some(1.0), Some(2.0)], vec![Some(3.0), None]],
        };
        let time = TimeAxis::Numeric(vec![0.0, 1.0]);
        let config = ReportConfig::default();
        let chart = ChartLayout::array(IdGenerator::new().issue("spectrum"), &series, &time, &config);

        let mut html = String::new();
        chart.render(&mut html)?;

        assert!(html.contains(r#"<div id="plot_spectrum"></div>"#));
        assert!(html.contains("(function() {"));
        assert!(html.contains(
            r#"Plotly.addFrames('plot_spectrum', [{"name":"0","data":[{"x":[0,1],"y":[1.0,2.0]}]},{"name":"1","data":[{"x":[0,1],"y":[3.0,null]}]}]);"#
        ));

        Ok(())
    }
}
