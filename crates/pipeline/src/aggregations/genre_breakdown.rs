//! How many ratings fall in each genre?

use crate::view::FilteredView;
use data_loader::GenreId;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Rating count per genre present in the view.
///
/// Largest count first, ties alphabetical. The counts always sum to the
/// number of rows in the view.
pub fn genre_breakdown(view: &FilteredView<'_>) -> Vec<GenreCount> {
    let mut counts: BTreeMap<GenreId, usize> = BTreeMap::new();
    for row in view.rows() {
        *counts.entry(row.genre).or_insert(0) += 1;
    }

    let mut breakdown: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: view.genre_label(genre).to_string(),
            count,
        })
        .collect();

    breakdown.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    breakdown
}
