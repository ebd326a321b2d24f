//! Error types for TOON encoding.
//!
//! Encoding a [`Value`](crate::Value) never fails. Errors only arise at the
//! edges: parsing JSON handed over by the indexer, or building invalid
//! [`EncodeOptions`](crate::EncodeOptions).

use thiserror::Error;

/// Errors that can occur around TOON encoding.
#[derive(Error, Debug)]
pub enum ToonError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Indentation width must be at least one space.
    #[error("invalid indent width {0}: must be a positive number of spaces")]
    InvalidIndent(usize),

    /// The delimiter name is not one of comma, tab or pipe.
    #[error("unknown delimiter '{0}': expected comma, tab or pipe")]
    UnknownDelimiter(String),
}

/// Convenience alias used throughout codeindex-toon.
pub type Result<T> = std::result::Result<T, ToonError>;
