//! Derived views over a filtered table.
//!
//! Every function here is pure: it takes a [`FilteredView`](crate::FilteredView)
//! and returns flat, ordered records at full precision. An empty view gives
//! an empty sequence (or `None` for scalar KPIs), never a panic.
//!
//! Ranking ties are broken by name so output is reproducible run to run.

pub mod genre_breakdown;
pub mod genre_satisfaction;
pub mod kpi;
pub mod rater_ages;
pub mod top_rated;
pub mod yearly_trend;

pub use genre_breakdown::{GenreCount, genre_breakdown};
pub use genre_satisfaction::{GenreMeanRating, genre_mean_ratings, top_genres_by_mean};
pub use kpi::{KpiSummary, kpi_summary, most_active_year};
pub use rater_ages::{RaterAge, rater_ages};
pub use top_rated::{MovieRating, movie_ratings, top_rated_from, top_rated_movies};
pub use yearly_trend::{YearMeanRating, yearly_mean_ratings};

use std::cmp::Ordering;

/// Default size of the genre satisfaction ranking
pub const DEFAULT_TOP_GENRES: usize = 3;

/// Default size of each top-rated movie list
pub const DEFAULT_TOP_MOVIES: usize = 5;

/// Running sum and count for one group
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    pub(crate) fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Higher mean first, then alphabetical by name
pub(crate) fn by_mean_desc_then_name(
    a_mean: f64,
    a_name: &str,
    b_mean: f64,
    b_name: &str,
) -> Ordering {
    b_mean.total_cmp(&a_mean).then_with(|| a_name.cmp(b_name))
}
