use std::fmt::Display;
use std::path::PathBuf;

pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const DEFAULT_TITLE: &str = "Data Report";
const DEFAULT_FRAME_DURATION_MS: u32 = 150;
const DEFAULT_TIME_PRECISION: usize = 2;

/// The successive variants of the report page.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// A single column of charts.
    Basic,
    /// The charts plus a sidebar that links to each of them.
    Sidebar,
    /// The sidebar, plus time-series charts that zoom and pan together.
    #[default]
    Linked,
}

impl Variant {
    pub fn has_sidebar(&self) -> bool {
        matches!(self, Variant::Sidebar | Variant::Linked)
    }

    pub fn links_zoom(&self) -> bool {
        matches!(self, Variant::Linked)
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Basic => write!(f, "basic"),
            Variant::Sidebar => write!(f, "sidebar"),
            Variant::Linked => write!(f, "linked"),
        }
    }
}

/// Where the page loads plotly.js from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotlySource {
    /// A `<script src>` pointing at the given URL.
    Cdn(String),
    /// A local plotly.js file whose content is inlined into the page,
    /// so the report also opens without network access.
    Inline(PathBuf),
}

impl Default for PlotlySource {
    fn default() -> Self {
        PlotlySource::Cdn(String::from(PLOTLY_CDN_URL))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub title: String,
    pub variant: Variant,
    pub plotly: PlotlySource,
    /// The delay between two frames when an array chart is playing.
    pub frame_duration_ms: u32,
    /// The decimals of numeric times in slider labels.
    pub time_precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            variant: Variant::default(),
            plotly: PlotlySource::default(),
            frame_duration_ms: DEFAULT_FRAME_DURATION_MS,
            time_precision: DEFAULT_TIME_PRECISION,
        }
    }
}
