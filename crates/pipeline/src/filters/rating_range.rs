//! Filter on the rating value.
//!
//! Always installed: the dashboard's rating slider has no "All" position,
//! its default is simply the full observed range.

use crate::traits::Filter;
use data_loader::RatingRecord;

/// Keeps rows with `min <= rating <= max`.
///
/// An inverted or NaN range keeps nothing.
pub struct RatingRangeFilter {
    min: f64,
    max: f64,
}

impl RatingRangeFilter {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn admits(&self, rating: f64) -> bool {
        self.min <= rating && rating <= self.max
    }
}

impl Filter for RatingRangeFilter {
    fn name(&self) -> &str {
        "RatingRangeFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a RatingRecord>) -> Vec<&'a RatingRecord> {
        rows.into_iter().filter(|r| self.admits(r.rating)).collect()
    }
}
