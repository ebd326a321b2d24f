//! TOON encoder: renders a [`Value`] tree as compact, indentation-based text.
//!
//! - **Objects**: one `key: value` line per field, nested objects indented
//! - **Primitive arrays**: inline as `key[N]: v1,v2,v3`
//! - **Tabular arrays**: uniform flat objects as `key[N]{f1,f2}:` plus rows
//! - **Mixed lists**: everything else as `key[N]:` plus `- item` lines
//!
//! Tab and pipe delimiters are announced inside the brackets (`[N|]`); comma
//! is implicit.
//!
//! # Example
//! ```
//! use codeindex_toon::{encode, Map, Value};
//!
//! let mut root = Map::new();
//! root.insert("a", 1);
//! root.insert("list", vec![1, 2, 3]);
//! assert_eq!(encode(&Value::Object(root)), "a: 1\nlist[3]: 1,2,3");
//! ```

use crate::error::Result;
use crate::layout::{classify, ArrayLayout};
use crate::options::EncodeOptions;
use crate::quote::{quote_key, quote_scalar};
use crate::types::{Map, Node, Scalar, Value};

/// Width of the `- ` list item marker. Fields after the first in a list item
/// object line up under the first key.
const LIST_MARKER_WIDTH: usize = 2;

static NULL: Value = Value::Null;

/// Encode with default options (2-space indent, comma delimiter).
pub fn encode(value: &Value) -> String {
    encode_with_options(value, &EncodeOptions::default())
}

/// Encode a value tree. Never fails: every value has a rendering.
///
/// `null` and the empty object encode to empty text. The output carries no
/// trailing newline and no trailing spaces.
pub fn encode_with_options(value: &Value, options: &EncodeOptions) -> String {
    let mut encoder = Encoder::new(options);
    encoder.root(value);
    encoder.out
}

/// Parse JSON text and encode it. Fails only if the input is not valid JSON.
pub fn encode_json(json: &str, options: &EncodeOptions) -> Result<String> {
    let parsed: serde_json::Value = serde_json::from_str(json)?;
    Ok(encode_with_options(&Value::from(parsed), options))
}

struct Encoder<'o> {
    options: &'o EncodeOptions,
    out: String,
}

impl<'o> Encoder<'o> {
    fn new(options: &'o EncodeOptions) -> Self {
        Self {
            options,
            out: String::new(),
        }
    }

    fn root(&mut self, value: &Value) {
        match value.node() {
            Node::Scalar(Scalar::Null) => {}
            Node::Scalar(scalar) => self.scalar(scalar),
            Node::Object(map) => self.fields(map, 0),
            Node::Array(items) => self.array(items, 0),
        }
    }

    /// Start a new line indented to `column`.
    fn line(&mut self, column: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        self.out.extend(std::iter::repeat_n(' ', column));
    }

    fn scalar(&mut self, scalar: Scalar<'_>) {
        let text = quote_scalar(scalar, self.options.delimiter());
        self.out.push_str(&text);
    }

    /// One line per field at `column`. An empty map writes nothing.
    fn fields(&mut self, map: &Map, column: usize) {
        for (key, value) in map.iter() {
            self.line(column);
            self.field(key, value, column);
        }
    }

    /// Write `key` and its value on the current line; nested content goes one
    /// level deeper than `column`.
    fn field(&mut self, key: &str, value: &Value, column: usize) {
        self.out.push_str(&quote_key(key));
        match value.node() {
            Node::Object(map) => {
                self.out.push(':');
                self.fields(map, column + self.options.indent());
            }
            Node::Array(items) => self.array(items, column),
            Node::Scalar(scalar) => {
                self.out.push_str(": ");
                self.scalar(scalar);
            }
        }
    }

    /// Write an array header at the cursor and its body (rows or list items)
    /// one level deeper than `column`.
    fn array(&mut self, items: &[Value], column: usize) {
        let layout = classify(items);
        tracing::trace!(len = items.len(), ?layout, "array layout");
        let body = column + self.options.indent();

        match layout {
            ArrayLayout::PrimitiveList if items.is_empty() => {
                self.out.push_str("[0]:");
            }
            ArrayLayout::PrimitiveList => {
                self.bracket(items.len());
                self.out.push_str(": ");
                self.delimited(items.iter());
            }
            ArrayLayout::Tabular { fields } => {
                self.bracket(items.len());
                self.out.push('{');
                let delimiter = self.options.delimiter().as_char();
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        self.out.push(delimiter);
                    }
                    self.out.push_str(&quote_key(field));
                }
                self.out.push_str("}:");
                for obj in items.iter().filter_map(Value::as_object) {
                    self.line(body);
                    self.delimited(fields.iter().map(|f| obj.get(f).unwrap_or(&NULL)));
                }
            }
            ArrayLayout::MixedList => {
                self.out.push_str(&format!("[{}]:", items.len()));
                for item in items {
                    self.list_item(item, body);
                }
            }
        }
    }

    /// `[N]` with the delimiter marker for tab and pipe.
    fn bracket(&mut self, len: usize) {
        self.out.push('[');
        self.out.push_str(&len.to_string());
        if let Some(marker) = self.options.delimiter().marker() {
            self.out.push(marker);
        }
        self.out.push(']');
    }

    /// Scalars joined by the active delimiter. Containers cannot reach here
    /// after classification; they fall back to `null`.
    fn delimited<'v>(&mut self, values: impl Iterator<Item = &'v Value>) {
        let delimiter = self.options.delimiter().as_char();
        for (i, value) in values.enumerate() {
            if i > 0 {
                self.out.push(delimiter);
            }
            match value.node() {
                Node::Scalar(scalar) => self.scalar(scalar),
                Node::Object(_) | Node::Array(_) => self.out.push_str("null"),
            }
        }
    }

    /// One `- ` item at `column`.
    fn list_item(&mut self, item: &Value, column: usize) {
        match item.node() {
            Node::Object(map) if map.is_empty() => {
                self.line(column);
                self.out.push('-');
            }
            Node::Object(map) => {
                let field_column = column + LIST_MARKER_WIDTH;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i == 0 {
                        self.line(column);
                        self.out.push_str("- ");
                    } else {
                        self.line(field_column);
                    }
                    self.field(key, value, field_column);
                }
            }
            Node::Array(inner) => {
                self.line(column);
                self.out.push_str("- ");
                self.array(inner, column);
            }
            Node::Scalar(scalar) => {
                self.line(column);
                self.out.push_str("- ");
                self.scalar(scalar);
            }
        }
    }
}
