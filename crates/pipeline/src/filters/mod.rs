//! Filter implementations for the rating pipeline.
//!
//! One filter per dashboard control; they compose with logical AND.

pub mod genre;
pub mod rating_range;
pub mod year;

// Re-export for convenience
pub use genre::GenreFilter;
pub use rating_range::RatingRangeFilter;
pub use year::YearFilter;
