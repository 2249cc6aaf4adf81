//! Building the canonical [`RatingsTable`] from a file on disk.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

impl RatingsTable {
    /// Load the ratings dataset from a CSV file.
    ///
    /// This is the main entry point for loading data and is meant to run
    /// once per process.
    ///
    /// Steps:
    /// 1. Parse and normalize every row
    /// 2. Derive the closed genre domain and intern genres
    /// 3. Record the observed years and rating domain
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading ratings from {}", path.display());
        let start = Instant::now();

        let rows = parser::parse_ratings(path)?;
        debug!("Parsed {} rows in {:?}", rows.len(), start.elapsed());

        let table = RatingsTable::from_rows(rows)?;

        info!(
            "Loaded {} ratings across {} genres and {} release years in {:?}",
            table.len(),
            table.genres().len(),
            table.observed_years().len(),
            start.elapsed()
        );
        Ok(table)
    }
}
