//! Best-rated movies with enough ratings to be trusted.

use crate::view::FilteredView;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{MeanAccumulator, by_mean_desc_then_name};

/// Threshold of the broader top-movies list
pub const BROAD_MIN_RATINGS: usize = 50;

/// Threshold of the stricter top-movies list
pub const STRICT_MIN_RATINGS: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRating {
    pub title: String,
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Mean rating and rating count of every title in the view, by title.
pub fn movie_ratings(view: &FilteredView<'_>) -> Vec<MovieRating> {
    let mut groups: BTreeMap<&str, MeanAccumulator> = BTreeMap::new();
    for row in view.rows() {
        groups.entry(row.title.as_str()).or_default().push(row.rating);
    }

    groups
        .into_iter()
        .filter_map(|(title, acc)| {
            Some(MovieRating {
                title: title.to_string(),
                mean_rating: acc.mean()?,
                rating_count: acc.count(),
            })
        })
        .collect()
}

/// Top `n` of precomputed movie stats among titles with at least
/// `min_ratings` ratings.
///
/// Lets one grouping pass serve several thresholds.
pub fn top_rated_from(stats: &[MovieRating], min_ratings: usize, n: usize) -> Vec<MovieRating> {
    let mut eligible: Vec<MovieRating> = stats
        .iter()
        .filter(|m| m.rating_count >= min_ratings)
        .cloned()
        .collect();

    eligible.sort_by(|a, b| by_mean_desc_then_name(a.mean_rating, &a.title, b.mean_rating, &b.title));
    eligible.truncate(n);
    eligible
}

/// Top `n` titles by mean rating among those with at least `min_ratings`.
pub fn top_rated_movies(view: &FilteredView<'_>, min_ratings: usize, n: usize) -> Vec<MovieRating> {
    top_rated_from(&movie_ratings(view), min_ratings, n)
}
