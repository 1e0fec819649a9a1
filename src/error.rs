//! Error types for the content-query library.
//!
//! Query building and descriptor translation never fail. Errors come from
//! the edges: reading descriptor or config files, decoding JSON that does
//! not have the expected shape, and bad command line input. All of them are
//! represented by [`ContentQueryError`].
//!
//! # Examples
//!
//! ```
//! use content_query::error::{ContentQueryError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ContentQueryError::invalid_argument("missing descriptor"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for content-query operations.
#[derive(Error, Debug)]
pub enum ContentQueryError {
    /// I/O errors (reading descriptor or config files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for operations that may fail with ContentQueryError.
pub type Result<T> = std::result::Result<T, ContentQueryError>;

impl ContentQueryError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ContentQueryError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ContentQueryError::InvalidArgument(msg.into())
    }
}
