//! Error types for Stockroom
//!
//! Uses `thiserror` for library errors. Catalog outcomes such as "not found"
//! are not errors; they live in [`crate::domain::entities`] as outcome enums.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stockroom operations
pub type StockroomResult<T> = Result<T, StockroomError>;

/// Main error type for Stockroom operations
#[derive(Error, Debug)]
pub enum StockroomError {
    /// Config file passed explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// User input where a number was expected
    #[error("invalid number '{input}': expected {expected}")]
    InvalidNumber {
        input: String,
        expected: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_number() {
        let err = StockroomError::InvalidNumber {
            input: "abc".to_string(),
            expected: "a price",
        };
        assert_eq!(err.to_string(), "invalid number 'abc': expected a price");
    }

    #[test]
    fn test_error_display_config_not_found() {
        let err = StockroomError::ConfigNotFound {
            path: PathBuf::from("missing/stockroom.toml"),
        };
        assert_eq!(
            err.to_string(),
            "config file not found: missing/stockroom.toml"
        );
    }
}
