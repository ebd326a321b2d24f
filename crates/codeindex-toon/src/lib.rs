//! # codeindex-toon
//!
//! Encoder for codebase index trees in **TOON (Token-Oriented Object Notation)**.
//!
//! A codebase scan produces a tree of components, packages and dependency
//! lists. Written as JSON it repeats every key for every element; TOON drops
//! braces in favour of indentation, prints uniform object arrays as tables,
//! and quotes strings only where a reader could otherwise misparse them.
//!
//! ## Quick start
//!
//! ```rust
//! use codeindex_toon::{encode_json, EncodeOptions};
//!
//! let json = r#"{"rows":[{"id":1,"name":"x"},{"id":2,"name":"y"}]}"#;
//! let toon = encode_json(json, &EncodeOptions::default()).unwrap();
//! assert_eq!(toon, "rows[2]{id,name}:\n  1,x\n  2,y");
//! ```
//!
//! ## Modules
//!
//! - [`types`] — `Value` tree, ordered `Map`, `Number`
//! - [`options`] — `EncodeOptions` (indent width, `Delimiter`)
//! - [`quote`] — scalar and key quoting rules
//! - [`layout`] — tabular / primitive / mixed array classification
//! - [`encoder`] — `Value` → TOON text
//! - [`error`] — error types for JSON input and option validation

pub mod encoder;
pub mod error;
pub mod layout;
pub mod options;
pub mod quote;
pub mod types;

pub use encoder::{encode, encode_json, encode_with_options};
pub use error::{Result, ToonError};
pub use layout::{classify, ArrayLayout};
pub use options::{Delimiter, EncodeOptions};
pub use quote::{quote_key, quote_scalar, quote_str};
pub use types::{Map, Node, Number, Scalar, Value};
