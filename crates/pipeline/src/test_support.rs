//! Fixture builders shared by the unit tests.

use chrono::{NaiveDate, NaiveDateTime};
use data_loader::{GenreId, RatingRecord, RatingRow, RatingsTable, Year};

pub(crate) fn timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 5, 17)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .unwrap()
}

/// A bare record with an already-interned genre id
pub(crate) fn record(user: &str, title: &str, genre: u16, year: Year, rating: f64) -> RatingRecord {
    RatingRecord {
        user_id: user.to_string(),
        title: title.to_string(),
        genre: GenreId(genre),
        year,
        rating,
        timestamp: timestamp(),
        age: None,
    }
}

/// A table from `(user, title, genre, year, rating)` tuples, no ages
pub(crate) fn table(rows: &[(&str, &str, &str, Year, f64)]) -> RatingsTable {
    let rows = rows
        .iter()
        .map(|&(user, title, genre, year, rating)| row(user, title, genre, year, rating, None))
        .collect();
    RatingsTable::from_rows(rows).unwrap()
}

/// A table from `(user, title, genre, year, rating, age)` tuples
pub(crate) fn table_with_ages(rows: &[(&str, &str, &str, Year, f64, Option<f64>)]) -> RatingsTable {
    let rows = rows
        .iter()
        .map(|&(user, title, genre, year, rating, age)| row(user, title, genre, year, rating, age))
        .collect();
    RatingsTable::from_rows(rows).unwrap()
}

fn row(user: &str, title: &str, genre: &str, year: Year, rating: f64, age: Option<f64>) -> RatingRow {
    RatingRow {
        user_id: user.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        timestamp: timestamp(),
        age,
    }
}
