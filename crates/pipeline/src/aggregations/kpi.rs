//! Headline KPIs of the filtered table.

use crate::view::FilteredView;
use data_loader::Year;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use super::MeanAccumulator;

/// The four KPI tiles.
///
/// `mean_rating` and `most_active_year` are `None` when no row matched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiSummary {
    /// Number of distinct titles
    pub distinct_movies: usize,
    /// Number of rating rows
    pub total_ratings: usize,
    pub mean_rating: Option<f64>,
    /// Year with the most ratings; ties go to the smallest year
    pub most_active_year: Option<Year>,
}

pub fn kpi_summary(view: &FilteredView<'_>) -> KpiSummary {
    let mut overall = MeanAccumulator::default();
    let mut titles = HashSet::new();
    for row in view.rows() {
        overall.push(row.rating);
        titles.insert(row.title.as_str());
    }

    KpiSummary {
        distinct_movies: titles.len(),
        total_ratings: view.len(),
        mean_rating: overall.mean(),
        most_active_year: most_active_year(view),
    }
}

/// The release year with the highest rating count.
///
/// Years are scanned in ascending order and only a strictly larger count
/// replaces the current best, so a tie resolves to the smallest year.
pub fn most_active_year(view: &FilteredView<'_>) -> Option<Year> {
    let mut counts: BTreeMap<Year, usize> = BTreeMap::new();
    for row in view.rows() {
        *counts.entry(row.year).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(Year, usize)>, (year, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((year, count)),
        })
        .map(|(year, _)| year)
}
