//! Everything the dashboard shows for one filter selection.

use data_loader::{RatingRecord, Year};
use pipeline::aggregations::{
    GenreCount, GenreMeanRating, KpiSummary, MovieRating, RaterAge, YearMeanRating,
};
use pipeline::FilterSpec;
use serde::Serialize;

/// One row of the raw data preview, genre resolved to its label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleRow {
    pub user_id: String,
    pub title: String,
    pub genre: String,
    pub year: Year,
    pub rating: f64,
    pub timestamp: String,
    pub age: Option<f64>,
}

impl SampleRow {
    pub(crate) fn from_record(record: &RatingRecord, genre: &str) -> Self {
        Self {
            user_id: record.user_id.clone(),
            title: record.title.clone(),
            genre: genre.to_string(),
            year: record.year,
            rating: record.rating,
            timestamp: record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            age: record.age,
        }
    }
}

/// The seven derived views plus a raw preview, at full precision.
///
/// Owned data only: a snapshot outlives the view it was computed from
/// and can be handed to any session or serialized as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub spec: FilterSpec,
    pub filtered_rows: usize,
    pub kpis: KpiSummary,
    pub genre_satisfaction: Vec<GenreMeanRating>,
    pub yearly_trend: Vec<YearMeanRating>,
    pub genre_breakdown: Vec<GenreCount>,
    pub top_rated_broad: Vec<MovieRating>,
    pub top_rated_strict: Vec<MovieRating>,
    pub rater_ages: Vec<RaterAge>,
    pub sample: Vec<SampleRow>,
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.filtered_rows == 0
    }
}
