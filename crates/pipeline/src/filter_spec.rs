//! The user's current filter selection and the domain it is chosen from.
//!
//! A [`FilterSpec`] is a small `Copy` value rebuilt on every interaction.
//! [`FilterOptions`] describes what the controls may offer, derived from
//! the canonical table, and is where UI input gets validated.

use data_loader::{GenreDomain, GenreId, RATING_SCALE_MAX, RATING_SCALE_MIN, RatingRecord, RatingsTable, Year};
use serde::Serialize;
use thiserror::Error;

/// Label the controls use for "no constraint"
pub const ALL_LABEL: &str = "All";

/// Either no constraint or one specific value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

/// A filter selection that cannot have come from well-behaved controls
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidFilterSpec {
    #[error("rating range is inverted: min {min} > max {max}")]
    InvertedRange { min: f64, max: f64 },

    #[error("rating bounds must be finite numbers")]
    NonFiniteBound,

    #[error("rating range {min}..={max} is outside the observed domain {domain_min}..={domain_max}")]
    OutOfDomain {
        min: f64,
        max: f64,
        domain_min: f64,
        domain_max: f64,
    },

    #[error("year {0} does not occur in the dataset")]
    UnknownYear(Year),

    #[error("'{0}' is not a year")]
    MalformedYear(String),

    #[error("genre '{0}' does not occur in the dataset")]
    UnknownGenre(String),
}

/// The current selection state of the dashboard controls.
///
/// Rating bounds are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilterSpec {
    pub year: Selection<Year>,
    pub genre: Selection<GenreId>,
    pub rating_min: f64,
    pub rating_max: f64,
}

impl FilterSpec {
    /// A spec with no year/genre constraint and the given rating range
    pub fn new(rating_min: f64, rating_max: f64) -> Self {
        Self {
            year: Selection::All,
            genre: Selection::All,
            rating_min,
            rating_max,
        }
    }

    pub fn with_year(mut self, year: Selection<Year>) -> Self {
        self.year = year;
        self
    }

    pub fn with_genre(mut self, genre: Selection<GenreId>) -> Self {
        self.genre = genre;
        self
    }

    /// Whether a single row passes every constraint
    pub fn admits(&self, record: &RatingRecord) -> bool {
        self.year.admits(&record.year)
            && self.genre.admits(&record.genre)
            && self.rating_min <= record.rating
            && record.rating <= self.rating_max
    }

    /// Check the spec against the control domain.
    ///
    /// Meant for the UI boundary; the filter engine accepts any spec and
    /// simply yields an empty view for impossible ones.
    pub fn validate(&self, options: &FilterOptions) -> Result<(), InvalidFilterSpec> {
        if !self.rating_min.is_finite() || !self.rating_max.is_finite() {
            return Err(InvalidFilterSpec::NonFiniteBound);
        }
        if self.rating_min > self.rating_max {
            return Err(InvalidFilterSpec::InvertedRange {
                min: self.rating_min,
                max: self.rating_max,
            });
        }
        let (domain_min, domain_max) = options.rating_domain;
        if self.rating_min < domain_min || self.rating_max > domain_max {
            return Err(InvalidFilterSpec::OutOfDomain {
                min: self.rating_min,
                max: self.rating_max,
                domain_min,
                domain_max,
            });
        }
        if let Selection::Only(year) = self.year {
            if !options.years.contains(&year) {
                return Err(InvalidFilterSpec::UnknownYear(year));
            }
        }
        if let Selection::Only(genre) = self.genre {
            if options.genres.label(genre).is_none() {
                return Err(InvalidFilterSpec::UnknownGenre(format!("#{}", genre.0)));
            }
        }
        Ok(())
    }
}

impl Default for FilterSpec {
    /// No constraints over the whole rating scale
    fn default() -> Self {
        Self::new(RATING_SCALE_MIN, RATING_SCALE_MAX)
    }
}

/// Values the filter controls may offer, derived from one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Observed release years, ascending
    pub years: Vec<Year>,
    /// Observed genres, alphabetical
    pub genres: GenreDomain,
    /// Observed (min, max) rating; the full scale for an empty table
    pub rating_domain: (f64, f64),
}

impl FilterOptions {
    pub fn from_table(table: &RatingsTable) -> Self {
        Self {
            years: table.observed_years().to_vec(),
            genres: table.genres().clone(),
            rating_domain: table
                .rating_domain()
                .unwrap_or((RATING_SCALE_MIN, RATING_SCALE_MAX)),
        }
    }

    /// The selection the dashboard starts with: everything
    pub fn default_spec(&self) -> FilterSpec {
        FilterSpec::new(self.rating_domain.0, self.rating_domain.1)
    }

    /// Year choices as shown in a select box, "All" first
    pub fn year_choices(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL.to_string())
            .chain(self.years.iter().map(|y| y.to_string()))
            .collect()
    }

    /// Genre choices as shown in a select box, "All" first
    pub fn genre_choices(&self) -> Vec<String> {
        std::iter::once(ALL_LABEL.to_string())
            .chain(self.genres.labels().iter().cloned())
            .collect()
    }

    /// Turn a year control value ("All" or a year) into a selection
    pub fn select_year(&self, choice: &str) -> Result<Selection<Year>, InvalidFilterSpec> {
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Selection::All);
        }
        let year: Year = choice
            .parse()
            .map_err(|_| InvalidFilterSpec::MalformedYear(choice.to_string()))?;
        if self.years.contains(&year) {
            Ok(Selection::Only(year))
        } else {
            Err(InvalidFilterSpec::UnknownYear(year))
        }
    }

    /// Turn a genre control value ("All" or a label) into a selection
    pub fn select_genre(&self, choice: &str) -> Result<Selection<GenreId>, InvalidFilterSpec> {
        let choice = choice.trim();
        if choice.eq_ignore_ascii_case(ALL_LABEL) {
            return Ok(Selection::All);
        }
        self.genres
            .resolve(choice)
            .map(Selection::Only)
            .ok_or_else(|| InvalidFilterSpec::UnknownGenre(choice.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::table;

    fn options() -> FilterOptions {
        FilterOptions::from_table(&table(&[
            ("1", "Heat", "Thriller", 1995, 6.0),
            ("2", "Up", "Animation", 2009, 9.0),
            ("3", "Rope", "Drama", 1948, 7.5),
        ]))
    }

    #[test]
    fn test_options_from_table() {
        let options = options();
        assert_eq!(options.years, vec![1948, 1995, 2009]);
        assert_eq!(options.rating_domain, (6.0, 9.0));
        assert_eq!(options.year_choices()[0], "All");
        assert_eq!(
            options.genre_choices(),
            vec!["All", "Animation", "Drama", "Thriller"]
        );
    }

    #[test]
    fn test_default_spec_covers_everything() {
        let spec = options().default_spec();
        assert_eq!(spec.year, Selection::All);
        assert_eq!(spec.genre, Selection::All);
        assert_eq!((spec.rating_min, spec.rating_max), (6.0, 9.0));
        assert!(spec.validate(&options()).is_ok());
    }

    #[test]
    fn test_select_controls() {
        let options = options();
        assert_eq!(options.select_year("All").unwrap(), Selection::All);
        assert_eq!(options.select_year("1995").unwrap(), Selection::Only(1995));
        assert_eq!(
            options.select_year("2020"),
            Err(InvalidFilterSpec::UnknownYear(2020))
        );
        assert!(matches!(
            options.select_year("soon"),
            Err(InvalidFilterSpec::MalformedYear(_))
        ));
        assert_eq!(
            options.select_genre("Drama").unwrap(),
            Selection::Only(GenreId(1))
        );
        assert_eq!(options.select_genre("all").unwrap(), Selection::All);
        assert!(matches!(
            options.select_genre("Western"),
            Err(InvalidFilterSpec::UnknownGenre(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let options = options();

        let inverted = FilterSpec::new(8.0, 7.0);
        assert!(matches!(
            inverted.validate(&options),
            Err(InvalidFilterSpec::InvertedRange { .. })
        ));

        let outside = FilterSpec::new(0.0, 9.0);
        assert!(matches!(
            outside.validate(&options),
            Err(InvalidFilterSpec::OutOfDomain { .. })
        ));

        let nan = FilterSpec::new(f64::NAN, 9.0);
        assert_eq!(nan.validate(&options), Err(InvalidFilterSpec::NonFiniteBound));

        let unknown_year = options.default_spec().with_year(Selection::Only(1900));
        assert_eq!(
            unknown_year.validate(&options),
            Err(InvalidFilterSpec::UnknownYear(1900))
        );
    }

    #[test]
    fn test_empty_table_falls_back_to_rating_scale() {
        let options = FilterOptions::from_table(&RatingsTable::new());
        assert_eq!(options.rating_domain, (0.0, 10.0));
        assert_eq!(options.year_choices(), vec!["All"]);
    }
}
