//! Error types for the sqlscrub library.
//!
//! All errors are represented by the [`ScrubError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use sqlscrub::error::{Result, ScrubError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ScrubError::invalid_config("unknown case mode"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sqlscrub operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum ScrubError {
    /// A string-literal token whose quoting cannot be parsed. Signals an
    /// input-contract violation by the upstream tokenizer.
    #[error("malformed string literal: {0}")]
    MalformedLiteral(String),

    /// Invalid pipeline or filter configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O errors (configuration file loading)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ScrubError.
pub type Result<T> = std::result::Result<T, ScrubError>;

impl ScrubError {
    /// Create a new malformed-literal error.
    pub fn malformed_literal<S: Into<String>>(text: S) -> Self {
        ScrubError::MalformedLiteral(text.into())
    }

    /// Create a new invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        ScrubError::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = ScrubError::malformed_literal("'oops");
        assert_eq!(error.to_string(), "malformed string literal: 'oops");

        let error = ScrubError::invalid_config("width must be positive");
        assert_eq!(
            error.to_string(),
            "invalid configuration: width must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = ScrubError::from(io_error);

        match error {
            ScrubError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
