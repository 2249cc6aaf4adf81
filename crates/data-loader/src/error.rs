//! Error types for the data-loader crate.
//!
//! Every variant is fatal at startup: the loader never hands back a
//! partially parsed table.

use thiserror::Error;

/// Errors that can occur while loading the ratings file
#[derive(Error, Debug)]
pub enum LoadError {
    /// File could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected the file (bad quoting, ragged rows, invalid UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A column the canonical table needs is not in the header row
    #[error("Missing required column: {column}")]
    MissingColumn { column: String },

    /// A field in a row couldn't be parsed
    ///
    /// `line` is the 1-based line in the source file, header included.
    #[error("Parse error at line {line}, column '{column}': {reason}")]
    ParseError {
        line: u64,
        column: String,
        reason: String,
    },

    /// A field parsed but its value is outside the allowed domain
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// More distinct genres than a `GenreId` can number
    #[error("Too many distinct genres: {count} (at most 65536 are supported)")]
    TooManyGenres { count: usize },
}

/// Result alias for loader operations
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = LoadError::ParseError {
            line: 12,
            column: "year".to_string(),
            reason: "not an integer".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 12, column 'year': not an integer"
        );

        let err = LoadError::MissingColumn {
            column: "rating".to_string(),
        };
        assert!(err.to_string().contains("rating"));
    }
}
