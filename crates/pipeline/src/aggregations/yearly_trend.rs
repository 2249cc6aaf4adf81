//! How does the mean rating move across release years?

use crate::view::FilteredView;
use data_loader::Year;
use serde::Serialize;
use std::collections::BTreeMap;

use super::MeanAccumulator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearMeanRating {
    pub year: Year,
    pub mean_rating: f64,
    pub rating_count: usize,
}

/// Mean rating per release year, oldest year first.
pub fn yearly_mean_ratings(view: &FilteredView<'_>) -> Vec<YearMeanRating> {
    let mut groups: BTreeMap<Year, MeanAccumulator> = BTreeMap::new();
    for row in view.rows() {
        groups.entry(row.year).or_default().push(row.rating);
    }

    groups
        .into_iter()
        .filter_map(|(year, acc)| {
            Some(YearMeanRating {
                year,
                mean_rating: acc.mean()?,
                rating_count: acc.count(),
            })
        })
        .collect()
}
