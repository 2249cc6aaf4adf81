//! # Dashboard Crate
//!
//! Turns the canonical ratings table plus a filter selection into what a
//! movie ratings dashboard displays.
//!
//! ## Components
//!
//! - **dashboard**: [`Dashboard`], the per-selection recomputation
//! - **snapshot**: [`DashboardSnapshot`], the seven derived views at full precision
//! - **presentation**: metric tiles and chart directives for a renderer
//! - **config**: [`DashboardConfig`], sizes and thresholds
//!
//! ## Example Usage
//!
//! ```ignore
//! use dashboard::{Dashboard, DashboardConfig};
//! use data_loader::RatingsTable;
//! use std::sync::Arc;
//!
//! let table = Arc::new(RatingsTable::load_from_file(path)?);
//! let dashboard = Dashboard::new(table, DashboardConfig::default());
//!
//! let spec = dashboard.filter_options().default_spec();
//! let presentation = dashboard.render(&spec);
//! println!("{}", serde_json::to_string_pretty(&presentation)?);
//! ```

pub mod config;
pub mod dashboard;
pub mod presentation;
pub mod snapshot;

#[cfg(test)]
mod test_support;

pub use config::{DashboardConfig, MIN_AGE_BIN_WIDTH};
pub use dashboard::Dashboard;
pub use presentation::{ChartKind, ChartRow, ChartSpec, HistogramBin, Metric, Orientation, Presentation};
pub use snapshot::{DashboardSnapshot, SampleRow};
