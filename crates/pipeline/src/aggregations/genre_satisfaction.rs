//! Which genres do viewers rate highest?

use crate::view::FilteredView;
use data_loader::GenreId;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{MeanAccumulator, by_mean_desc_then_name};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreMeanRating {
    pub genre: String,
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Mean rating of every genre in the view, best first.
pub fn genre_mean_ratings(view: &FilteredView<'_>) -> Vec<GenreMeanRating> {
    let mut groups: BTreeMap<GenreId, MeanAccumulator> = BTreeMap::new();
    for row in view.rows() {
        groups.entry(row.genre).or_default().push(row.rating);
    }

    let mut ranked: Vec<GenreMeanRating> = groups
        .into_iter()
        .filter_map(|(genre, acc)| {
            Some(GenreMeanRating {
                genre: view.genre_label(genre).to_string(),
                mean_rating: acc.mean()?,
                rating_count: acc.count(),
            })
        })
        .collect();

    ranked.sort_by(|a, b| by_mean_desc_then_name(a.mean_rating, &a.genre, b.mean_rating, &b.genre));
    ranked
}

/// The `n` genres with the highest mean rating.
pub fn top_genres_by_mean(view: &FilteredView<'_>, n: usize) -> Vec<GenreMeanRating> {
    let mut ranked = genre_mean_ratings(view);
    ranked.truncate(n);
    ranked
}
