//! Figures and chart tooltips for the proxy traffic report.
//!
//! Raw byte counts, durations and counters are scaled into display units by
//! [`format`], and hover text for line and pie charts is resolved by
//! [`TooltipResolver`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use application::formatter::{format, format_measurement};
pub use application::tooltip_resolver::{
    MonthNames, SeriesAlignment, TooltipResolver, UnmatchedTimestamp,
};
pub use domain::hover::{AxisKind, HoverPoint};
pub use domain::measurement::{MeasurementValue, UnitKind};
pub use domain::series::{Series, TimeSeriesPoint};
pub use domain::tooltip::{FigureLine, NO_DATASET, Tooltip};
pub use error::{Error, Result};
pub use infrastructure::config::{ReportConfig, load_report_config, load_report_config_from_str};
pub use infrastructure::logging::init_logging;
