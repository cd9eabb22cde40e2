use serde::Serialize;

use crate::chart::Values;

/// A named animation frame of an array chart.
#[derive(Serialize, Debug, Clone)]
pub struct Frame {
    pub name: String,
    pub data: Vec<FrameData>,
}

#[derive(Serialize, Debug, Clone)]
pub struct FrameData {
    pub x: Values,
    pub y: Values,
}

/// The frames an animation runs through: all of them, or the named ones.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum FrameSelector {
    All(()),
    Names(Vec<Option<String>>),
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AnimationOptions {
    pub frame: FrameOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AnimationMode>,
    #[serde(rename = "fromcurrent", skip_serializing_if = "Option::is_none")]
    pub from_current: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redraw: Option<bool>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    Immediate,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Animate,
}

#[derive(Serialize, Debug, Clone)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(rename = "showactive")]
    pub show_active: bool,
    pub x: f64,
    pub y: f64,
    pub buttons: Vec<Button>,
}

impl UpdateMenu {
    /// The play and pause buttons of an animated chart.
    pub fn play_pause(frame_duration: u32) -> UpdateMenu {
        let play = Button {
            label: String::from("▶ Play"),
            method: Method::Animate,
            args: (
                FrameSelector::All(()),
                AnimationOptions {
                    frame: FrameOptions {
                        duration: frame_duration,
                        redraw: Some(true),
                    },
                    mode: None,
                    from_current: Some(true),
                },
            ),
        };

        let pause = Button {
            label: String::from("⏸ Pause"),
            method: Method::Animate,
            args: (
                FrameSelector::Names(vec![None]),
                AnimationOptions {
                    frame: FrameOptions {
                        duration: 0,
                        redraw: None,
                    },
                    mode: Some(AnimationMode::Immediate),
                    from_current: None,
                },
            ),
        };

        Self {
            kind: "buttons",
            show_active: false,
            x: 0.05,
            y: -0.15,
            buttons: vec![play, pause],
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct Button {
    pub label: String,
    pub method: Method,
    pub args: (FrameSelector, AnimationOptions),
}

#[derive(Serialize, Debug, Clone)]
pub struct Slider {
    pub active: usize,
    #[serde(rename = "currentvalue")]
    pub current_value: CurrentValue,
    pub pad: Pad,
    pub len: f64,
    pub x: f64,
    pub steps: Vec<SliderStep>,
}

#[derive(Serialize, Debug, Clone)]
pub struct CurrentValue {
    pub prefix: String,
    pub visible: bool,
    #[serde(rename = "xanchor")]
    pub x_anchor: &'static str,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct Pad {
    pub b: u32,
    pub t: u32,
}

/// A slider step that jumps to one frame.
#[derive(Serialize, Debug, Clone)]
pub struct SliderStep {
    pub args: (FrameSelector, AnimationOptions),
    pub label: String,
    pub method: Method,
}

impl SliderStep {
    pub fn to_frame(frame: String, label: String) -> SliderStep {
        Self {
            args: (
                FrameSelector::Names(vec![Some(frame)]),
                AnimationOptions {
                    frame: FrameOptions {
                        duration: 0,
                        redraw: Some(true),
                    },
                    mode: Some(AnimationMode::Immediate),
                    from_current: None,
                },
            ),
            label,
            method: Method::Animate,
        }
    }
}
