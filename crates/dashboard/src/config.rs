//! Tunables of the dashboard layout.

use pipeline::aggregations::top_rated::{BROAD_MIN_RATINGS, STRICT_MIN_RATINGS};
use pipeline::aggregations::{DEFAULT_TOP_GENRES, DEFAULT_TOP_MOVIES};
use serde::{Deserialize, Serialize};

/// Narrowest age histogram bin the CLI accepts, in years
pub const MIN_AGE_BIN_WIDTH: f64 = 0.1;

/// Sizes and thresholds of the derived views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Genres in the satisfaction ranking
    pub top_genres: usize,
    /// Titles in each top-rated list
    pub top_movies: usize,
    /// Minimum ratings for the broader top-rated list
    pub broad_threshold: usize,
    /// Minimum ratings for the stricter top-rated list
    pub strict_threshold: usize,
    /// Width of one age histogram bin, in years
    pub age_bin_width: f64,
    /// Rows in the raw data preview
    pub sample_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_genres: DEFAULT_TOP_GENRES,
            top_movies: DEFAULT_TOP_MOVIES,
            broad_threshold: BROAD_MIN_RATINGS,
            strict_threshold: STRICT_MIN_RATINGS,
            age_bin_width: 2.0,
            sample_rows: 5,
        }
    }
}
