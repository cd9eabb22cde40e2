use std::fs;

use crate::chart::Chart;
use crate::config::PlotlySource;
use crate::config::Variant;
use crate::error::Result;
use crate::error::VisError;

/// The model of a report page: its sections and their charts.
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub variant: Variant,
    pub plotly: PlotlyScript,
    pub sections: Vec<Section>,
}

impl Page {
    pub fn chart_count(&self) -> usize {
        self.sections.iter().map(|s| s.charts.len()).sum()
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub charts: Vec<Chart>,
}

impl Section {
    pub fn new(id: &'static str, title: &'static str, charts: Vec<Chart>) -> Section {
        Self { id, title, charts }
    }
}

/// The plotly.js script element of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotlyScript {
    /// Loaded from the URL.
    Src(String),
    /// Embedded source code.
    Inline(String),
}

impl PlotlyScript {
    pub fn load(source: &PlotlySource) -> Result<PlotlyScript> {
        match source {
            PlotlySource::Cdn(url) => Ok(PlotlyScript::Src(url.clone())),
            PlotlySource::Inline(path) => fs::read_to_string(path)
                .map(PlotlyScript::Inline)
                .map_err(|error| VisError::PlotlyScript {
                    path: path.clone(),
                    error,
                }),
        }
    }
}
