//! Shared fixtures for the unit tests.

use chrono::NaiveDate;
use data_loader::{RatingRow, RatingsTable, Year};

fn row(user: &str, title: &str, genre: &str, year: Year, rating: f64, age: Option<f64>) -> RatingRow {
    RatingRow {
        user_id: user.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        timestamp: NaiveDate::from_ymd_opt(2019, 11, 2)
            .and_then(|d| d.and_hms_opt(18, 30, 0))
            .unwrap(),
        age,
    }
}

/// Four genres over three years; "Crowd Pleaser" has 60 ratings, enough
/// for the broad top list but not the strict one.
pub(crate) fn sample_table() -> RatingsTable {
    let mut rows = vec![
        row("a", "Rope", "Drama", 1948, 8.0, Some(34.0)),
        row("b", "Rope", "Drama", 1948, 6.0, Some(21.0)),
        row("c", "Heat", "Thriller", 1995, 9.0, None),
        row("a", "Heat", "Thriller", 1995, 7.0, Some(34.0)),
        row("d", "Airplane!", "Comedy", 1980, 5.0, Some(47.0)),
    ];
    for i in 0..60 {
        rows.push(row(&format!("fan{i}"), "Crowd Pleaser", "Adventure", 1995, 8.5, Some(18.0 + (i % 30) as f64)));
    }
    RatingsTable::from_rows(rows).unwrap()
}
