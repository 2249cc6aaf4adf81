//! Parser for the ratings CSV file.
//!
//! Expected header (any order, extra columns ignored):
//! `user_id,title,genre,year,rating,timestamp,age`
//!
//! Each row is normalized into a [`RatingRow`]: the timestamp becomes a
//! `NaiveDateTime`, `year` an integer and `age` an optional float.

use crate::error::{LoadError, Result};
use crate::types::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::StringRecord;
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "user_id",
    "title",
    "genre",
    "year",
    "rating",
    "timestamp",
    "age",
];

/// Date/time layouts accepted for the timestamp column, tried in order
const DATETIME_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Oldest plausible rater age, in years
const MAX_AGE: f64 = 150.0;

/// Spellings of a missing age
const MISSING_MARKERS: [&str; 6] = ["", "NaN", "nan", "NA", "null", "None"];

/// Header positions of the required columns
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    user_id: usize,
    title: usize,
    genre: usize,
    year: usize,
    rating: usize,
    timestamp: usize,
    age: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| LoadError::MissingColumn {
                    column: column.to_string(),
                })
        };

        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = find(column)?;
        }
        let [user_id, title, genre, year, rating, timestamp, age] = positions;

        Ok(Self {
            user_id,
            title,
            genre,
            year,
            rating,
            timestamp,
            age,
        })
    }
}

/// Parse the ratings file at `path`
pub fn parse_ratings(path: &Path) -> Result<Vec<RatingRow>> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let file = File::open(path)?;
    parse_ratings_from_reader(file)
}

/// Parse ratings CSV from any reader.
///
/// The CSV records are read sequentially, then converted in parallel. When
/// several rows are bad, the one earliest in the file is reported.
pub fn parse_ratings_from_reader<R: Read>(input: R) -> Result<Vec<RatingRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let columns = ColumnMap::from_headers(reader.headers()?)?;

    let records: Vec<StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, csv::Error>>()?;

    let parsed: Vec<Result<RatingRow>> = records
        .par_iter()
        .map(|record| parse_record(record, &columns))
        .collect();

    parsed.into_iter().collect()
}

fn parse_record(record: &StringRecord, columns: &ColumnMap) -> Result<RatingRow> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    let user_id = required(record, columns.user_id, "user_id", line)?;
    let title = required(record, columns.title, "title", line)?;
    let genre = required(record, columns.genre, "genre", line)?;

    let year_str = required(record, columns.year, "year", line)?;
    let year = parse_year(year_str).ok_or_else(|| LoadError::ParseError {
        line,
        column: "year".to_string(),
        reason: format!("'{}' is not an integer year", year_str),
    })?;

    let rating = parse_rating(required(record, columns.rating, "rating", line)?, line)?;

    let timestamp_str = required(record, columns.timestamp, "timestamp", line)?;
    let timestamp = parse_timestamp(timestamp_str).ok_or_else(|| LoadError::ParseError {
        line,
        column: "timestamp".to_string(),
        reason: format!("'{}' is not a recognised date/time", timestamp_str),
    })?;

    let age = parse_age(record.get(columns.age).unwrap_or("").trim(), line)?;

    Ok(RatingRow {
        user_id: user_id.to_string(),
        title: title.to_string(),
        genre: genre.to_string(),
        year,
        rating,
        timestamp,
        age,
    })
}

/// Fetch a field that must be present and non-empty
fn required<'r>(
    record: &'r StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<&'r str> {
    match record.get(idx).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LoadError::ParseError {
            line,
            column: column.to_string(),
            reason: "missing value".to_string(),
        }),
    }
}

/// Parse a release year.
///
/// Example: "1995" -> Some(1995)
///          "1995.0" -> Some(1995)
///          "1995.5" -> None
fn parse_year(s: &str) -> Option<Year> {
    if let Ok(year) = s.parse::<Year>() {
        return Some(year);
    }
    let value = s.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && (0.0..=Year::MAX as f64).contains(&value) {
        Some(value as Year)
    } else {
        None
    }
}

fn parse_rating(s: &str, line: u64) -> Result<f64> {
    let rating: f64 = s.parse().map_err(|e| LoadError::ParseError {
        line,
        column: "rating".to_string(),
        reason: format!("Invalid rating: {}", e),
    })?;

    if !rating.is_finite() || !(RATING_SCALE_MIN..=RATING_SCALE_MAX).contains(&rating) {
        return Err(LoadError::InvalidValue {
            field: "rating".to_string(),
            value: s.to_string(),
        });
    }
    Ok(rating)
}

/// Parse a timestamp in any of the layouts the dataset exports use
fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    for format in DATETIME_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    // Unix seconds
    s.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.naive_utc())
}

fn parse_age(s: &str, line: u64) -> Result<Option<f64>> {
    if MISSING_MARKERS.contains(&s) {
        return Ok(None);
    }
    let age: f64 = s.parse().map_err(|e| LoadError::ParseError {
        line,
        column: "age".to_string(),
        reason: format!("Invalid age: {}", e),
    })?;

    if !age.is_finite() || !(0.0..=MAX_AGE).contains(&age) {
        return Err(LoadError::InvalidValue {
            field: "age".to_string(),
            value: s.to_string(),
        });
    }
    Ok(Some(age))
}
