//! Benchmarks for filtering and the derived views
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic table shaped like the real dataset (a few hundred
//! titles, a dozen genres, ~100k ratings).

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use data_loader::{RatingRow, RatingsTable};
use pipeline::{FilterOptions, FilterSpec, Selection, aggregations};

const GENRES: [&str; 12] = [
    "Action", "Adventure", "Animation", "Comedy", "Crime", "Documentary",
    "Drama", "Fantasy", "Horror", "Romance", "Sci-Fi", "Thriller",
];

fn synthetic_table(ratings: usize) -> RatingsTable {
    let timestamp = NaiveDate::from_ymd_opt(2015, 6, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid date");

    let rows = (0..ratings)
        .map(|i| {
            let title = i % 400;
            RatingRow {
                user_id: format!("user-{}", i % 5_000),
                title: format!("Movie {title}"),
                genre: GENRES[title % GENRES.len()].to_string(),
                year: 1980 + (title % 40) as u16,
                rating: ((i * 7) % 11) as f64,
                timestamp,
                age: (i % 9 != 0).then(|| 16.0 + (i % 60) as f64),
            }
        })
        .collect();
    RatingsTable::from_rows(rows).expect("twelve genres fit")
}

fn bench_filter(c: &mut Criterion) {
    let table = synthetic_table(100_000);
    let options = FilterOptions::from_table(&table);
    let spec = options
        .default_spec()
        .with_genre(options.select_genre("Drama").expect("genre exists"));

    c.bench_function("filter_by_genre", |b| {
        b.iter(|| {
            let view = pipeline::apply(black_box(&table), black_box(&spec));
            black_box(view.len())
        })
    });
}

fn bench_all_views(c: &mut Criterion) {
    let table = synthetic_table(100_000);
    let spec = FilterSpec::new(0.0, 10.0).with_year(Selection::All);

    c.bench_function("all_derived_views", |b| {
        b.iter(|| {
            let view = pipeline::apply(black_box(&table), black_box(&spec));
            let stats = aggregations::movie_ratings(&view);
            black_box((
                aggregations::kpi_summary(&view),
                aggregations::top_genres_by_mean(&view, 3),
                aggregations::yearly_mean_ratings(&view),
                aggregations::genre_breakdown(&view),
                aggregations::top_rated_from(&stats, 50, 5),
                aggregations::top_rated_from(&stats, 150, 5),
                aggregations::rater_ages(&view),
            ))
        })
    });
}

criterion_group!(benches, bench_filter, bench_all_views);
criterion_main!(benches);
