//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to rows of the canonical table.

use data_loader::RatingRecord;

/// Core trait for filtering rating rows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` lets one pipeline serve many sessions at once
/// - Filters take ownership of the row list and return the rows they keep
/// - Rows are borrowed from the canonical table; a filter never alters them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Keep the rows this filter admits, preserving their order.
    fn apply<'a>(&self, rows: Vec<&'a RatingRecord>) -> Vec<&'a RatingRecord>;
}
