mod animation;
mod axes;

use serde::Serialize;

use crate::id::Id;

pub use crate::chart::animation::AnimationMode;
pub use crate::chart::animation::AnimationOptions;
pub use crate::chart::animation::Button;
pub use crate::chart::animation::CurrentValue;
pub use crate::chart::animation::Frame;
pub use crate::chart::animation::FrameData;
pub use crate::chart::animation::FrameOptions;
pub use crate::chart::animation::FrameSelector;
pub use crate::chart::animation::Method;
pub use crate::chart::animation::Pad;
pub use crate::chart::animation::Slider;
pub use crate::chart::animation::SliderStep;
pub use crate::chart::animation::UpdateMenu;
pub use crate::chart::axes::Axis;
pub use crate::chart::axes::AxisType;

/// A chart of the report together with its plotly.js specification.
#[derive(Serialize, Debug, Clone)]
pub struct Chart {
    pub id: Id,
    pub title: String,
    pub kind: ChartKind,
    /// Whether the x-axis zoom is shared with the other linked charts.
    pub linked: bool,
    pub spec: ChartSpec,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Values over time.
    TimeSeries,
    /// Values over the array index, animated over time.
    Array,
}

/// The arguments of `Plotly.newPlot` and `Plotly.addFrames`.
#[derive(Serialize, Debug, Clone)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}

/// The x or y values of a trace.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Values {
    Numbers(Vec<Option<f64>>),
    Indices(Vec<usize>),
    Labels(Vec<String>),
}

#[derive(Serialize, Debug, Clone)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub x: Values,
    pub y: Values,
    pub mode: Mode,
    pub line: Line,
    pub marker: Marker,
}

impl Trace {
    pub fn new(x: Values, y: Values, marker_size: u32) -> Trace {
        Self {
            kind: TraceKind::Scatter,
            x,
            y,
            mode: Mode::LinesMarkers,
            line: Line { width: 2 },
            marker: Marker { size: marker_size },
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    #[default]
    Scatter,
}

#[derive(Serialize, Debug, Clone, Copy, Default)]
pub enum Mode {
    #[default]
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Line {
    pub width: u32,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Marker {
    pub size: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Title {
        Self { text: text.into() }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Layout {
    pub title: Title,
    #[serde(rename = "xaxis")]
    pub x_axis: Axis,
    #[serde(rename = "yaxis")]
    pub y_axis: Axis,
    pub height: u32,
    pub margin: Margin,
    #[serde(rename = "updatemenus", skip_serializing_if = "Vec::is_empty")]
    pub update_menus: Vec<UpdateMenu>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sliders: Vec<Slider>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialize_trace() -> Result<(), serde_json::Error> {
        let trace = Trace::new(
            Values::Numbers(vec![Some(0.0), Some(0.5)]),
            Values::Numbers(vec![Some(1.0), None]),
            5,
        );

        assert_eq!(
            serde_json::to_value(&trace)?,
            json!({
                "type": "scatter",
                "x": [0.0, 0.5],
                "y": [1.0, null],
                "mode": "lines+markers",
                "line": {"width": 2},
                "marker": {"size": 5}
            })
        );

        Ok(())
    }

    #[test]
    fn empty_animation_fields_are_omitted() -> Result<(), serde_json::Error> {
        let layout = Layout {
            title: Title::new("cpu"),
            x_axis: Axis::new("Time", AxisType::Linear),
            y_axis: Axis::new("cpu", AxisType::Linear),
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

        let value = serde_json::to_value(&layout)?;

        assert_eq!(value["title"], json!({"text": "cpu"}));
        assert_eq!(value["xaxis"], json!({"title": {"text": "Time"}, "type": "linear"}));
        assert!(value.get("updatemenus").is_none());
        assert!(value.get("sliders").is_none());

        Ok(())
    }
}
