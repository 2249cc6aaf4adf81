//! Core domain types for the ratings dataset.
//!
//! The canonical table is a flat list of [`RatingRecord`]s plus the closed
//! [`GenreDomain`] observed when the file was loaded. Once built, a
//! [`RatingsTable`] is never mutated; share it behind an `Arc`.

use crate::error::{LoadError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier of the person who gave a rating
pub type UserId = String;

/// Release year of a movie
pub type Year = u16;

/// Lowest rating the scale allows
pub const RATING_SCALE_MIN: f64 = 0.0;

/// Highest rating the scale allows
pub const RATING_SCALE_MAX: f64 = 10.0;

// =============================================================================
// Genre Domain
// =============================================================================

/// Position of a genre label inside its [`GenreDomain`].
///
/// Ids are only meaningful together with the table that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GenreId(pub u16);

/// The closed set of genre labels seen in a dataset, sorted alphabetically.
///
/// Sorting means `GenreId` order equals label order, which keeps every
/// genre-keyed grouping deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreDomain {
    labels: Vec<String>,
}

impl GenreDomain {
    /// Build a domain from any collection of labels (duplicates collapse)
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        Self {
            labels: unique.into_iter().collect(),
        }
    }

    /// Look up the id of a label; `None` if the dataset never used it
    pub fn resolve(&self, label: &str) -> Option<GenreId> {
        self.labels
            .binary_search_by(|candidate| candidate.as_str().cmp(label))
            .ok()
            .and_then(|idx| u16::try_from(idx).ok())
            .map(GenreId)
    }

    /// The label behind an id
    pub fn label(&self, id: GenreId) -> Option<&str> {
        self.labels.get(id.0 as usize).map(String::as_str)
    }

    /// All labels, alphabetically
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

// =============================================================================
// Rating Types
// =============================================================================

/// One row as read from the source file, before genre interning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRow {
    pub user_id: UserId,
    pub title: String,
    pub genre: String,
    pub year: Year,
    pub rating: f64,
    pub timestamp: NaiveDateTime,
    pub age: Option<f64>,
}

/// One row of the canonical table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: UserId,
    pub title: String,
    pub genre: GenreId,
    pub year: Year,
    /// Rating on the 0-10 scale
    pub rating: f64,
    /// When the rating was given
    pub timestamp: NaiveDateTime,
    /// Rater's age, absent when the source left it blank
    pub age: Option<f64>,
}

// =============================================================================
// RatingsTable - The Canonical Table
// =============================================================================

/// The full, type-normalized dataset.
///
/// Built once at startup (see [`RatingsTable::load_from_file`]) and read-only
/// afterwards. Records keep the order of the source file.
#[derive(Debug, Clone, Default)]
pub struct RatingsTable {
    pub(crate) records: Vec<RatingRecord>,
    pub(crate) genres: GenreDomain,
    /// Distinct release years, ascending
    pub(crate) years: Vec<Year>,
    /// Observed (min, max) rating, `None` for an empty table
    pub(crate) rating_domain: Option<(f64, f64)>,
}

impl RatingsTable {
    /// Creates a new, empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the canonical table from parsed rows.
    ///
    /// Collects the genre domain, interns each row's genre and computes the
    /// observed year list and rating domain. Fails when there are more
    /// distinct genres than a [`GenreId`] can number.
    pub fn from_rows(rows: Vec<RatingRow>) -> Result<Self> {
        let genres = GenreDomain::from_labels(rows.iter().map(|row| row.genre.as_str()));

        let ids: HashMap<&str, GenreId> = genres
            .labels()
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                u16::try_from(idx)
                    .map(|id| (label.as_str(), GenreId(id)))
                    .map_err(|_| LoadError::TooManyGenres {
                        count: genres.len(),
                    })
            })
            .collect::<Result<_>>()?;

        let records: Vec<RatingRecord> = rows
            .iter()
            .map(|row| RatingRecord {
                user_id: row.user_id.clone(),
                title: row.title.clone(),
                // every label was inserted above
                genre: ids.get(row.genre.as_str()).copied().unwrap_or(GenreId(0)),
                year: row.year,
                rating: row.rating,
                timestamp: row.timestamp,
                age: row.age,
            })
            .collect();

        let years: BTreeSet<Year> = records.iter().map(|r| r.year).collect();

        let rating_domain = records.iter().map(|r| r.rating).fold(None, |acc, rating| {
            match acc {
                None => Some((rating, rating)),
                Some((lo, hi)) => Some((f64::min(lo, rating), f64::max(hi, rating))),
            }
        });

        Ok(Self {
            records,
            genres,
            years: years.into_iter().collect(),
            rating_domain,
        })
    }

    /// All records in source order
    pub fn records(&self) -> &[RatingRecord] {
        &self.records
    }

    /// The closed genre domain of this dataset
    pub fn genres(&self) -> &GenreDomain {
        &self.genres
    }

    /// Label for a genre id, or `"?"` for an id this table never issued
    pub fn genre_label(&self, id: GenreId) -> &str {
        self.genres.label(id).unwrap_or("?")
    }

    /// Distinct release years present in the table, ascending
    pub fn observed_years(&self) -> &[Year] {
        &self.years
    }

    /// Observed (min, max) rating
    pub fn rating_domain(&self) -> Option<(f64, f64)> {
        self.rating_domain
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(user: &str, title: &str, genre: &str, year: Year, rating: f64) -> RatingRow {
        RatingRow {
            user_id: user.to_string(),
            title: title.to_string(),
            genre: genre.to_string(),
            year,
            rating,
            timestamp: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            age: None,
        }
    }

    #[test]
    fn test_genre_domain_is_sorted_and_deduplicated() {
        let domain = GenreDomain::from_labels(["Drama", "Action", "Drama", "Comedy"]);
        assert_eq!(domain.labels(), &["Action", "Comedy", "Drama"]);
        assert_eq!(domain.resolve("Comedy"), Some(GenreId(1)));
        assert_eq!(domain.resolve("Western"), None);
        assert_eq!(domain.label(GenreId(2)), Some("Drama"));
        assert_eq!(domain.label(GenreId(9)), None);
    }

    #[test]
    fn test_from_rows_interns_genres() {
        let table = RatingsTable::from_rows(vec![
            row("1", "Heat", "Thriller", 1995, 8.0),
            row("2", "Up", "Animation", 2009, 9.0),
            row("3", "Heat", "Thriller", 1995, 6.0),
        ])
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.genres().labels(), &["Animation", "Thriller"]);
        assert_eq!(table.records()[0].genre, GenreId(1));
        assert_eq!(table.genre_label(table.records()[1].genre), "Animation");
        assert_eq!(table.observed_years(), &[1995, 2009]);
        assert_eq!(table.rating_domain(), Some((6.0, 9.0)));
    }

    #[test]
    fn test_genre_ids_never_collide() {
        let rows: Vec<RatingRow> = (0..=u16::MAX as usize + 1)
            .map(|i| row("1", "Heat", &format!("genre-{i:06}"), 1995, 8.0))
            .collect();

        let err = RatingsTable::from_rows(rows).unwrap_err();
        assert!(matches!(err, LoadError::TooManyGenres { count: 65_537 }));
    }

    #[test]
    fn test_largest_genre_id_is_usable() {
        let rows: Vec<RatingRow> = (0..=u16::MAX as usize)
            .map(|i| row("1", "Heat", &format!("genre-{i:06}"), 1995, 8.0))
            .collect();

        let table = RatingsTable::from_rows(rows).unwrap();
        assert_eq!(table.genres().len(), 65_536);
        assert_eq!(
            table.genres().resolve("genre-065535"),
            Some(GenreId(u16::MAX))
        );
    }

    #[test]
    fn test_empty_table() {
        let table = RatingsTable::new();
        assert!(table.is_empty());
        assert!(table.genres().is_empty());
        assert!(table.observed_years().is_empty());
        assert_eq!(table.rating_domain(), None);
    }
}
