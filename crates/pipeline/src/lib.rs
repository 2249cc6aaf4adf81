//! Filtering and aggregation of movie ratings.
//!
//! This crate provides:
//! - Filter trait and implementations for the dashboard controls
//! - FilterPipeline for composing filters
//! - The derived views the dashboard displays
//!
//! ## Architecture
//! Data flows one way:
//! 1. The canonical table is filtered by a [`FilterSpec`] into a [`FilteredView`]
//! 2. Each aggregation reduces the view to a flat, ordered result
//!
//! Nothing is cached between selections; every change of the controls is
//! a fresh, independent computation.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterOptions, aggregations};
//!
//! let options = FilterOptions::from_table(&table);
//! let spec = options.default_spec().with_year(options.select_year("1999")?);
//!
//! let view = pipeline::apply(&table, &spec);
//! let kpis = aggregations::kpi_summary(&view);
//! let top = aggregations::top_rated_movies(&view, 50, 5);
//! ```

pub mod aggregations;
pub mod filter_pipeline;
pub mod filter_spec;
pub mod filters;
pub mod traits;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use filter_pipeline::{FilterPipeline, apply};
pub use filter_spec::{ALL_LABEL, FilterOptions, FilterSpec, InvalidFilterSpec, Selection};
pub use traits::Filter;
pub use view::FilteredView;
