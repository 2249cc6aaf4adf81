//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filter_spec::FilterSpec;
use crate::filters::{GenreFilter, RatingRangeFilter, YearFilter};
use crate::traits::Filter;
use crate::view::FilteredView;
use data_loader::RatingsTable;
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(YearFilter::new(Selection::Only(1999)))
///     .add_filter(RatingRangeFilter::new(5.0, 10.0));
///
/// let filtered = pipeline.apply(FilteredView::all(&table));
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline for one dashboard selection: year, genre, rating range.
    ///
    /// Each filter is a plain predicate over a row, so their order does not
    /// change the result.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        Self::new()
            .add_filter(YearFilter::new(spec.year))
            .add_filter(GenreFilter::new(spec.genre))
            .add_filter(RatingRangeFilter::new(spec.rating_min, spec.rating_max))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to a view.
    pub fn apply<'a>(&self, view: FilteredView<'a>) -> FilteredView<'a> {
        let table = view.table();
        let mut current = view.into_rows();
        for filter in &self.filters {
            debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        if current.is_empty() {
            debug!("Filter selection matched no rows");
        }
        FilteredView::with_rows(table, current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter the canonical table by one selection.
pub fn apply<'a>(table: &'a RatingsTable, spec: &FilterSpec) -> FilteredView<'a> {
    FilterPipeline::from_spec(spec).apply(FilteredView::all(table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_spec::Selection;
    use crate::test_support::table;
    use data_loader::GenreId;

    fn sample() -> RatingsTable {
        table(&[
            ("1", "Heat", "Thriller", 1995, 6.0),
            ("2", "Heat", "Thriller", 1995, 9.0),
            ("3", "Casino", "Drama", 1995, 8.0),
            ("4", "Up", "Animation", 2009, 9.0),
        ])
    }

    #[test]
    fn test_empty_pipeline() {
        let table = sample();
        let filtered = FilterPipeline::new().apply(FilteredView::all(&table));
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_spec_filters_compose_with_and() {
        let table = sample();
        let thriller = table.genres().resolve("Thriller").unwrap();
        let spec = FilterSpec::new(7.0, 10.0)
            .with_year(Selection::Only(1995))
            .with_genre(Selection::Only(thriller));

        let filtered = apply(&table, &spec);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.rows()[0].user_id, "2");
    }

    #[test]
    fn test_filter_order_does_not_matter() {
        let table = sample();
        let forward = FilterPipeline::new()
            .add_filter(YearFilter::new(Selection::Only(1995)))
            .add_filter(RatingRangeFilter::new(7.0, 10.0))
            .apply(FilteredView::all(&table));
        let backward = FilterPipeline::new()
            .add_filter(RatingRangeFilter::new(7.0, 10.0))
            .add_filter(YearFilter::new(Selection::Only(1995)))
            .apply(FilteredView::all(&table));

        assert_eq!(forward, backward);
        assert_eq!(forward.len(), 2);
    }

    #[test]
    fn test_impossible_spec_yields_empty_view() {
        let table = sample();

        let inverted = FilterSpec::new(9.0, 1.0);
        assert!(apply(&table, &inverted).is_empty());

        let unknown_genre = FilterSpec::new(0.0, 10.0).with_genre(Selection::Only(GenreId(99)));
        assert!(apply(&table, &unknown_genre).is_empty());

        let unknown_year = FilterSpec::new(0.0, 10.0).with_year(Selection::Only(1801));
        assert!(apply(&table, &unknown_year).is_empty());
    }
}
