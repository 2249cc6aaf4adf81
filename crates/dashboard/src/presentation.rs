//! Display directives for a rendering collaborator.
//!
//! Maps a [`DashboardSnapshot`] onto metric tiles and chart specs that any
//! charting library can bind without further reshaping: every chart row is
//! a flat `{category, value, label}` record. Formatting for display (two
//! decimals, thousands separators) happens here and nowhere upstream.

use serde::Serialize;

use crate::config::DashboardConfig;
use crate::snapshot::{DashboardSnapshot, SampleRow};

/// Shown in place of the age chart when no rater has an age
pub const NO_AGE_DATA_NOTICE: &str = "No user age data available for the current filter selection.";

/// Shown in place of the age chart when the ages span too many bins
pub const AGE_RANGE_TOO_WIDE_NOTICE: &str =
    "Rater ages span too wide a range to chart at the current bin width.";

/// Most bins an age histogram may have
pub const MAX_HISTOGRAM_BINS: usize = 1_000;

/// Shown for a KPI that is undefined on an empty selection
pub const UNDEFINED: &str = "n/a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    /// Line with a marker on every point
    Line,
    Histogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// One KPI tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub category: String,
    pub value: f64,
    /// `value` formatted for tooltips and bar labels
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub orientation: Orientation,
    pub category_axis: String,
    pub value_axis: String,
    pub rows: Vec<ChartRow>,
    /// Set when the chart has nothing to draw and a message should be shown
    pub notice: Option<String>,
}

impl ChartSpec {
    fn new(id: &str, title: String, kind: ChartKind, orientation: Orientation) -> Self {
        Self {
            id: id.to_string(),
            title,
            kind,
            orientation,
            category_axis: String::new(),
            value_axis: String::new(),
            rows: Vec::new(),
            notice: None,
        }
    }

    fn axes(mut self, category: &str, value: &str) -> Self {
        self.category_axis = category.to_string();
        self.value_axis = value.to_string();
        self
    }

    fn rows(mut self, rows: Vec<ChartRow>) -> Self {
        self.rows = rows;
        self
    }
}

/// One bin of the age histogram, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Everything a front end needs to draw the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Presentation {
    pub metrics: Vec<Metric>,
    pub charts: Vec<ChartSpec>,
    pub sample: Vec<SampleRow>,
}

impl Presentation {
    pub fn from_snapshot(snapshot: &DashboardSnapshot, config: &DashboardConfig) -> Self {
        Self {
            metrics: kpi_metrics(snapshot),
            charts: vec![
                genre_satisfaction_chart(snapshot, config),
                yearly_trend_chart(snapshot),
                genre_breakdown_chart(snapshot),
                top_movies_chart(
                    "top_rated_broad",
                    &snapshot.top_rated_broad,
                    config.top_movies,
                    config.broad_threshold,
                ),
                top_movies_chart(
                    "top_rated_strict",
                    &snapshot.top_rated_strict,
                    config.top_movies,
                    config.strict_threshold,
                ),
                rater_age_chart(snapshot, config.age_bin_width),
            ],
            sample: snapshot.sample.clone(),
        }
    }

    pub fn chart(&self, id: &str) -> Option<&ChartSpec> {
        self.charts.iter().find(|c| c.id == id)
    }
}

fn kpi_metrics(snapshot: &DashboardSnapshot) -> Vec<Metric> {
    let kpis = &snapshot.kpis;
    let metric = |label: &str, value: String| Metric {
        label: label.to_string(),
        value,
    };

    vec![
        metric("Total Unique Movies", format_count(kpis.distinct_movies)),
        metric("Total Ratings Given", format_count(kpis.total_ratings)),
        metric(
            "Overall Mean Rating",
            kpis.mean_rating.map_or_else(|| UNDEFINED.to_string(), format_rating),
        ),
        metric(
            "Most Active Year",
            kpis.most_active_year
                .map_or_else(|| UNDEFINED.to_string(), |y| y.to_string()),
        ),
    ]
}

fn genre_satisfaction_chart(snapshot: &DashboardSnapshot, config: &DashboardConfig) -> ChartSpec {
    let rows = snapshot
        .genre_satisfaction
        .iter()
        .map(|g| rating_row(g.genre.clone(), g.mean_rating))
        .collect();

    ChartSpec::new(
        "genre_satisfaction",
        format!("{} Genres with the Highest Mean Rating", config.top_genres),
        ChartKind::Bar,
        Orientation::Vertical,
    )
    .axes("Genre", "Mean Rating")
    .rows(rows)
}

fn yearly_trend_chart(snapshot: &DashboardSnapshot) -> ChartSpec {
    let rows = snapshot
        .yearly_trend
        .iter()
        .map(|t| rating_row(t.year.to_string(), t.mean_rating))
        .collect();

    ChartSpec::new(
        "yearly_trend",
        "Mean Rating Trend by Release Year".to_string(),
        ChartKind::Line,
        Orientation::Vertical,
    )
    .axes("Release Year", "Mean Rating")
    .rows(rows)
}

/// Horizontal bars, smallest count first so the largest ends on top
fn genre_breakdown_chart(snapshot: &DashboardSnapshot) -> ChartSpec {
    let rows = snapshot
        .genre_breakdown
        .iter()
        .rev()
        .map(|g| ChartRow {
            category: g.genre.clone(),
            value: g.count as f64,
            label: format_count(g.count),
        })
        .collect();

    ChartSpec::new(
        "genre_breakdown",
        "Total Number of Ratings Per Genre".to_string(),
        ChartKind::Bar,
        Orientation::Horizontal,
    )
    .axes("Genre", "Count")
    .rows(rows)
}

fn top_movies_chart(
    id: &str,
    movies: &[pipeline::aggregations::MovieRating],
    top_movies: usize,
    threshold: usize,
) -> ChartSpec {
    let rows = movies
        .iter()
        .map(|m| rating_row(m.title.clone(), m.mean_rating))
        .collect();

    ChartSpec::new(
        id,
        format!("Top {top_movies} Movies with at least {threshold} Ratings"),
        ChartKind::Bar,
        Orientation::Horizontal,
    )
    .axes("Movie Title", "Mean Rating")
    .rows(rows)
}

fn rater_age_chart(snapshot: &DashboardSnapshot, bin_width: f64) -> ChartSpec {
    let ages: Vec<f64> = snapshot.rater_ages.iter().map(|a| a.age).collect();
    let rows: Vec<ChartRow> = age_histogram(&ages, bin_width)
        .into_iter()
        .map(|bin| ChartRow {
            category: format!("{}-{}", bin.start, bin.end),
            value: bin.count as f64,
            label: format_count(bin.count),
        })
        .collect();

    let mut chart = ChartSpec::new(
        "rater_ages",
        "Distribution of Rater Ages".to_string(),
        ChartKind::Histogram,
        Orientation::Vertical,
    )
    .axes("Age", "Frequency");

    if ages.is_empty() {
        chart.notice = Some(NO_AGE_DATA_NOTICE.to_string());
    } else if rows.is_empty() {
        chart.notice = Some(AGE_RANGE_TOO_WIDE_NOTICE.to_string());
    }
    chart.rows(rows)
}

fn rating_row(category: String, value: f64) -> ChartRow {
    ChartRow {
        category,
        value,
        label: format_rating(value),
    }
}

/// Bucket ages into contiguous bins of `bin_width` years.
///
/// Bins are aligned to multiples of the width and run from the bin holding
/// the youngest rater to the one holding the oldest, empty bins included.
/// A non-positive or non-finite width yields no bins, and so does a span
/// needing more than [`MAX_HISTOGRAM_BINS`] bins. Non-finite ages are skipped.
pub fn age_histogram(ages: &[f64], bin_width: f64) -> Vec<HistogramBin> {
    if !bin_width.is_finite() || bin_width <= 0.0 {
        return Vec::new();
    }

    // Bin indices stay in f64 so huge ages or tiny widths cannot overflow
    let bin_of = |age: f64| (age / bin_width).floor();
    let bins: Vec<f64> = ages
        .iter()
        .copied()
        .filter(|age| age.is_finite())
        .map(bin_of)
        .collect();
    let (first, last) = bins
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &bin| {
            (lo.min(bin), hi.max(bin))
        });
    if !first.is_finite() || !last.is_finite() {
        return Vec::new();
    }
    let span = last - first;
    if span >= MAX_HISTOGRAM_BINS as f64 {
        return Vec::new();
    }

    let mut counts = vec![0usize; span as usize + 1];
    for bin in bins {
        if let Some(count) = counts.get_mut((bin - first) as usize) {
            *count += 1;
        }
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(offset, count)| {
            let start = (first + offset as f64) * bin_width;
            HistogramBin {
                start,
                end: start + bin_width,
                count,
            }
        })
        .collect()
}

/// Two-decimal display of a rating
pub fn format_rating(value: f64) -> String {
    format!("{value:.2}")
}

/// Integer with thousands separators: 1234567 -> "1,234,567"
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
