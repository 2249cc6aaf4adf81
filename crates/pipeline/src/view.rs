//! A filtered view over the canonical table.

use data_loader::{GenreId, RatingRecord, RatingsTable};
use std::collections::HashSet;

/// Rows of the canonical table that passed a filter, in table order.
///
/// The view borrows; it never copies or alters a record. Two views are
/// equal when they come from the same table and hold the very same rows.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    table: &'a RatingsTable,
    rows: Vec<&'a RatingRecord>,
}

impl<'a> FilteredView<'a> {
    /// The unfiltered view: every row of the table
    pub fn all(table: &'a RatingsTable) -> Self {
        Self {
            table,
            rows: table.records().iter().collect(),
        }
    }

    pub(crate) fn with_rows(table: &'a RatingsTable, rows: Vec<&'a RatingRecord>) -> Self {
        Self { table, rows }
    }

    pub(crate) fn into_rows(self) -> Vec<&'a RatingRecord> {
        self.rows
    }

    /// The table this view was cut from
    pub fn table(&self) -> &'a RatingsTable {
        self.table
    }

    pub fn rows(&self) -> &[&'a RatingRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `n` rows, for a raw-data preview
    pub fn head(&self, n: usize) -> &[&'a RatingRecord] {
        &self.rows[..n.min(self.rows.len())]
    }

    /// Number of distinct raters in the view
    pub fn distinct_users(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.user_id.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Label for a genre id of the underlying table
    pub fn genre_label(&self, id: GenreId) -> &'a str {
        self.table.genre_label(id)
    }
}

impl PartialEq for FilteredView<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.table, other.table)
            && self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(a, b)| std::ptr::eq(*a, *b))
    }
}
