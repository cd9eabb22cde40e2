use serde::Serialize;
use tabvis_data::TimeAxis;

use crate::chart::Title;

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
    #[serde(rename = "type")]
    pub kind: AxisType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}

impl Axis {
    pub fn new(title: impl Into<String>, kind: AxisType) -> Axis {
        Self {
            title: Title::new(title),
            kind,
            range: None,
        }
    }

    pub fn with_range(mut self, range: Option<[f64; 2]>) -> Axis {
        self.range = range;
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    #[default]
    Linear,
    Date,
}

impl AxisType {
    pub fn xaxis(time: &TimeAxis) -> AxisType {
        match time {
            TimeAxis::DateTime(_) => AxisType::Date,
            TimeAxis::Numeric(_) => AxisType::Linear,
        }
    }
}
