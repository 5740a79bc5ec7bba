//! Error types for the pagedhtml library.

use std::io;
use thiserror::Error;

/// Result type alias for pagedhtml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting text to paged HTML.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source text could not be retrieved.
    #[error("Failed to retrieve source text: {0}")]
    Retrieval(String),

    /// An `image:` line carrying `,page=` could not be parsed.
    #[error("Malformed image directive on line {line}: {reason}")]
    MalformedDirective {
        /// 1-indexed source line number (0 when parsed outside a document)
        line: usize,
        /// What was wrong with the directive
        reason: String,
    },

    /// Page size must be a positive number of elements.
    #[error("Invalid page size: {0} (elements per page must be at least 1)")]
    InvalidPageSize(usize),

    /// The input is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Create a malformed directive error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedDirective {
            line,
            reason: reason.into(),
        }
    }

    /// Check whether this error only affects a single directive.
    ///
    /// Local errors are dropped in lenient mode; everything else aborts.
    pub fn is_local(&self) -> bool {
        matches!(self, Error::MalformedDirective { .. })
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<std::str::Utf8Error> for Error {
    fn from(err: std::str::Utf8Error) -> Self {
        Error::Encoding(err.to_string())
    }
}
