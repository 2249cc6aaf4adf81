//! Filter on release year.

use crate::filter_spec::Selection;
use crate::traits::Filter;
use data_loader::{RatingRecord, Year};

/// Keeps rows released in the selected year; `All` keeps everything.
pub struct YearFilter {
    year: Selection<Year>,
}

impl YearFilter {
    pub fn new(year: Selection<Year>) -> Self {
        Self { year }
    }
}

impl Filter for YearFilter {
    fn name(&self) -> &str {
        "YearFilter"
    }

    fn apply<'a>(&self, rows: Vec<&'a RatingRecord>) -> Vec<&'a RatingRecord> {
        match self.year {
            Selection::All => rows,
            Selection::Only(year) => rows.into_iter().filter(|r| r.year == year).collect(),
        }
    }
}
