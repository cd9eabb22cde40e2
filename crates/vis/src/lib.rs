//! [tabvis]'s visualization library.
//!
//! [tabvis]: https://github.com/nelusnegur/tabvis
//!
//! Builds plotly.js chart specifications from a [`tabvis_data::Dataset`] and
//! renders them into a single HTML page. Scalar series become time-series
//! charts; array series become index-vs-value charts with a time slider.

pub(crate) mod id;
pub(crate) mod template;

pub mod chart;
pub mod config;
pub mod error;
pub mod layout;
pub mod render;

mod report;

pub use crate::config::PlotlySource;
pub use crate::config::ReportConfig;
pub use crate::config::Variant;
pub use crate::id::Id;
pub use crate::id::IdGenerator;
pub use crate::report::Report;
