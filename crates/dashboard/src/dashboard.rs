//! # Dashboard
//!
//! Coordinates one refresh of the dashboard:
//! 1. Filter the canonical table by the current selection
//! 2. Compute every derived view from the filtered rows
//! 3. Package them as an owned [`DashboardSnapshot`]
//!
//! The canonical table is loaded once and shared read-only; a `Dashboard`
//! keeps no per-selection state, so one instance can serve any number of
//! sessions, each getting its own snapshot.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use data_loader::RatingsTable;
use pipeline::{FilterOptions, FilterSpec, aggregations};

use crate::config::DashboardConfig;
use crate::presentation::Presentation;
use crate::snapshot::{DashboardSnapshot, SampleRow};

#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<RatingsTable>,
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(table: Arc<RatingsTable>, config: DashboardConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &RatingsTable {
        &self.table
    }

    /// What the filter controls may offer
    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_table(&self.table)
    }

    /// Recompute every view for one selection
    pub fn snapshot(&self, spec: &FilterSpec) -> DashboardSnapshot {
        let start = Instant::now();
        let view = pipeline::apply(&self.table, spec);
        debug!("Filtered to {} of {} rows", view.len(), self.table.len());

        let movie_stats = aggregations::movie_ratings(&view);

        let snapshot = DashboardSnapshot {
            spec: *spec,
            filtered_rows: view.len(),
            kpis: aggregations::kpi_summary(&view),
            genre_satisfaction: aggregations::top_genres_by_mean(&view, self.config.top_genres),
            yearly_trend: aggregations::yearly_mean_ratings(&view),
            genre_breakdown: aggregations::genre_breakdown(&view),
            top_rated_broad: aggregations::top_rated_from(
                &movie_stats,
                self.config.broad_threshold,
                self.config.top_movies,
            ),
            top_rated_strict: aggregations::top_rated_from(
                &movie_stats,
                self.config.strict_threshold,
                self.config.top_movies,
            ),
            rater_ages: aggregations::rater_ages(&view),
            sample: view
                .head(self.config.sample_rows)
                .iter()
                .map(|record| SampleRow::from_record(record, view.genre_label(record.genre)))
                .collect(),
        };

        debug!("Computed dashboard snapshot in {:?}", start.elapsed());
        snapshot
    }

    /// Snapshot plus display directives, ready for a renderer
    pub fn render(&self, spec: &FilterSpec) -> Presentation {
        Presentation::from_snapshot(&self.snapshot(spec), &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_table;
    use pipeline::Selection;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(sample_table()), DashboardConfig::default())
    }

    #[test]
    fn test_snapshot_of_everything() {
        let dashboard = dashboard();
        let spec = dashboard.filter_options().default_spec();
        let snapshot = dashboard.snapshot(&spec);

        assert_eq!(snapshot.filtered_rows, dashboard.table().len());
        assert_eq!(snapshot.kpis.total_ratings, snapshot.filtered_rows);
        assert_eq!(snapshot.genre_satisfaction.len(), 3);
        assert_eq!(snapshot.sample.len(), 5);
        assert_eq!(snapshot.top_rated_broad[0].title, "Crowd Pleaser");
        assert!(snapshot.top_rated_strict.is_empty());
        assert_eq!(snapshot.spec, spec);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let dashboard = dashboard();
        let options = dashboard.filter_options();

        let everything = dashboard.snapshot(&options.default_spec());
        let none = dashboard.snapshot(&options.default_spec().with_year(Selection::Only(1800)));
        let again = dashboard.snapshot(&options.default_spec());

        assert!(none.is_empty());
        assert!(none.genre_satisfaction.is_empty());
        assert!(none.sample.is_empty());
        assert_eq!(everything, again);
    }

    #[test]
    fn test_custom_config() {
        let config = DashboardConfig {
            top_genres: 1,
            broad_threshold: 2,
            strict_threshold: 3,
            ..DashboardConfig::default()
        };
        let dashboard = Dashboard::new(Arc::new(sample_table()), config);
        let snapshot = dashboard.snapshot(&dashboard.filter_options().default_spec());

        assert_eq!(snapshot.genre_satisfaction.len(), 1);
        assert!(snapshot.top_rated_broad.len() >= snapshot.top_rated_strict.len());
    }
}
