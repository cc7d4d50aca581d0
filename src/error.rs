//! Error types for pdfsift.

use std::io;
use thiserror::Error;

/// Result type alias for pdfsift operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building or mining a document.
///
/// Data-shape irregularities (empty pages, lines without glyphs, missing
/// headings) are never errors; only a layout stream that cannot be decoded
/// at all is.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading layout streams or keyword files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A layout record could not be decoded as a text-bearing page.
    #[error("Decoding error on page {page}: {message}")]
    Decoding {
        /// 0-based index of the offending page record
        page: usize,
        /// What went wrong
        message: String,
    },

    /// Serialization of an output record failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value (keyword file, context window).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Create a decoding error for the given page record.
    pub fn decoding(page: usize, message: impl Into<String>) -> Self {
        Error::Decoding {
            page,
            message: message.into(),
        }
    }

    /// Whether the offending document should be quarantined rather than retried.
    pub fn is_decoding(&self) -> bool {
        matches!(self, Error::Decoding { .. })
    }
}
