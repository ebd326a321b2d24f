//! Encoder configuration: indentation width and field delimiter.
//!
//! Options are passed into every encode call and never mutated.
//!
//! ```
//! use codeindex_toon::{Delimiter, EncodeOptions};
//!
//! let opts = EncodeOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_indent(4)
//!     .unwrap();
//! assert_eq!(opts.indent(), 4);
//! assert_eq!(opts.delimiter().marker(), Some('|'));
//! ```

use crate::error::{Result, ToonError};
use std::str::FromStr;

/// Field separator for tabular rows and inline primitive arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// Character shown inside an array header's brackets. Comma is implicit.
    pub const fn marker(self) -> Option<char> {
        match self {
            Delimiter::Comma => None,
            Delimiter::Tab => Some('\t'),
            Delimiter::Pipe => Some('|'),
        }
    }
}

impl FromStr for Delimiter {
    type Err = ToonError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "comma" | "," => Ok(Delimiter::Comma),
            "tab" | "\t" => Ok(Delimiter::Tab),
            "pipe" | "|" => Ok(Delimiter::Pipe),
            other => Err(ToonError::UnknownDelimiter(other.to_string())),
        }
    }
}

/// Encoder configuration. Defaults to 2-space indentation and comma
/// delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    indent: usize,
    delimiter: Delimiter,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            delimiter: Delimiter::Comma,
        }
    }
}

impl EncodeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the number of spaces per nesting level. Zero is rejected: nested
    /// blocks would be indistinguishable from their parents.
    pub fn with_indent(mut self, indent: usize) -> Result<Self> {
        if indent == 0 {
            return Err(ToonError::InvalidIndent(indent));
        }
        self.indent = indent;
        Ok(self)
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }
}
