//! Turns a dataset into the page model. Nothing here renders HTML.

mod page;

use tabvis_data::ArraySeries;
use tabvis_data::Dataset;
use tabvis_data::ScalarSeries;
use tabvis_data::TimeAxis;
use tabvis_data::label;

use crate::chart::Axis;
use crate::chart::AxisType;
use crate::chart::Chart;
use crate::chart::ChartKind;
use crate::chart::ChartSpec;
use crate::chart::CurrentValue;
use crate::chart::Frame;
use crate::chart::FrameData;
use crate::chart::Layout;
use crate::chart::Margin;
use crate::chart::Pad;
use crate::chart::Slider;
use crate::chart::SliderStep;
use crate::chart::Title;
use crate::chart::Trace;
use crate::chart::UpdateMenu;
use crate::chart::Values;
use crate::config::ReportConfig;
use crate::id::Id;
use crate::id::IdGenerator;

pub use crate::layout::page::Page;
pub use crate::layout::page::PlotlyScript;
pub use crate::layout::page::Section;

const TIME_SERIES_SECTION: (&str, &str) = ("time-series", "Metrics Over Time");
const ARRAY_SECTION: (&str, &str) = ("array-data", "Array Data (Use Sliders)");

const TIME_AXIS_TITLE: &str = "Time";
const INDEX_AXIS_TITLE: &str = "Index";
const VALUE_AXIS_TITLE: &str = "Value";
const SLIDER_PREFIX: &str = "Time: ";

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Builds the chart of a single series.
pub struct ChartLayout;

impl ChartLayout {
    pub fn scalar(id: Id, series: &ScalarSeries, time: &TimeAxis) -> Chart {
        let title = label(&series.name, series.unit.as_deref());
        let trace = Trace::new(time_values(time), Values::Numbers(series.values.clone()), 5);

        let layout = Layout {
            title: Title::new(title.as_str()),
            x_axis: Axis::new(TIME_AXIS_TITLE, AxisType::xaxis(time)),
            y_axis: Axis::new(title.as_str(), AxisType::Linear),
            height: 300,
            margin: Margin {
                t: 50,
                b: 50,
                l: 60,
                r: 30,
            },
            update_menus: Vec::new(),
            sliders: Vec::new(),
        };

        Chart {
            id,
            title,
            kind: ChartKind::TimeSeries,
            linked: false,
            spec: ChartSpec {
                data: vec![trace],
                layout,
                frames: Vec::new(),
            },
        }
    }

    pub fn array(id: Id, series: &ArraySeries, time: &TimeAxis, config: &ReportConfig) -> Chart {
        let title = label(&series.name, series.unit.as_deref());
        let indices: Vec<usize> = (0..series.len).collect();
        let first_frame = series.frames.first().cloned().unwrap_or_default();

        let trace = Trace::new(
            Values::Indices(indices.clone()),
            Values::Numbers(first_frame),
            6,
        );

        let frames = series
            .frames
            .iter()
            .enumerate()
            .map(|(i, frame)| Frame {
                name: i.to_string(),
                data: vec![FrameData {
                    x: Values::Indices(indices.clone()),
                    y: Values::Numbers(frame.clone()),
                }],
            })
            .collect::<Vec<Frame>>();

        let steps = (0..frames.len())
            .map(|i| SliderStep::to_frame(i.to_string(), time.label(i, config.time_precision)))
            .collect();

        let slider = Slider {
            active: 0,
            current_value: CurrentValue {
                prefix: String::from(SLIDER_PREFIX),
                visible: true,
                x_anchor: "center",
            },
            pad: Pad { b: 10, t: 20 },
            len: 0.75,
            x: 0.25,
            steps,
        };

        let y_title = series.unit.as_deref().unwrap_or(VALUE_AXIS_TITLE);

        let layout = Layout {
            title: Title::new(title.as_str()),
            x_axis: Axis::new(INDEX_AXIS_TITLE, AxisType::Linear),
            y_axis: Axis::new(y_title, AxisType::Linear).with_range(value_range(series)),
            height: 350,
            margin: Margin {
                t: 50,
                b: 100,
                l: 60,
                r: 30,
            },
            update_menus: vec![UpdateMenu::play_pause(config.frame_duration_ms)],
            sliders: vec![slider],
        };

        Chart {
            id,
            title,
            kind: ChartKind::Array,
            linked: false,
            spec: ChartSpec {
                data: vec![trace],
                layout,
                frames,
            },
        }
    }
}

/// Builds the page model of a whole dataset.
pub struct PageLayout;

impl PageLayout {
    pub fn build(dataset: &Dataset, config: &ReportConfig, plotly: PlotlyScript) -> Page {
        let mut ids = IdGenerator::new();
        let linked = config.variant.links_zoom();

        let time_series = dataset
            .scalars()
            .map(|series| {
                let mut chart = ChartLayout::scalar(ids.issue(&series.column), series, &dataset.time);
                chart.linked = linked;
                chart
            })
            .collect::<Vec<Chart>>();

        let arrays = dataset
            .arrays()
            .map(|series| ChartLayout::array(ids.issue(&series.column), series, &dataset.time, config))
            .collect::<Vec<Chart>>();

        let mut sections = Vec::with_capacity(2);

        for ((id, title), charts) in [(TIME_SERIES_SECTION, time_series), (ARRAY_SECTION, arrays)] {
            if !charts.is_empty() {
                sections.push(Section::new(id, title, charts));
            }
        }

        Page {
            title: config.title.clone(),
            variant: config.variant,
            plotly,
            sections,
        }
    }
}

fn time_values(time: &TimeAxis) -> Values {
    match time {
        TimeAxis::Numeric(ts) => Values::Numbers(ts.iter().copied().map(Some).collect()),
        TimeAxis::DateTime(ts) => {
            Values::Labels(ts.iter().map(|t| t.format(DATETIME_FORMAT).to_string()).collect())
        }
    }
}

// Pads the range by a tenth of its span so the extremes stay visible
// while the frames change.
fn value_range(series: &ArraySeries) -> Option<[f64; 2]> {
    series.value_range().map(|(min, max)| {
        let padding = if max != min { 0.1 * (max - min) } else { 1.0 };
        [min - padding, max + padding]
    })
}
