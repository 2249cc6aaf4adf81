//! # Data Loader Crate
//!
//! Loads the movie ratings CSV into the canonical, immutable [`RatingsTable`].
//!
//! ## Main Components
//!
//! - **types**: Core domain types (RatingRecord, GenreDomain, RatingsTable)
//! - **parser**: Parse and normalize CSV rows
//! - **index**: Build the table from a file
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::RatingsTable;
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let table = Arc::new(RatingsTable::load_from_file(Path::new("data/cleaned_movie_ratings.csv"))?);
//!
//! println!("{} ratings, genres: {:?}", table.len(), table.genres().labels());
//! ```

// Public modules
pub mod error;
pub mod index;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{LoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    Year,
    // Core types
    GenreDomain,
    GenreId,
    RatingRecord,
    RatingRow,
    RatingsTable,
    // Rating scale
    RATING_SCALE_MAX,
    RATING_SCALE_MIN,
};
