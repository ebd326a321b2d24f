//! Scalar and key quoting.
//!
//! Strings are emitted bare whenever that cannot be confused with structure
//! (keys, headers, list markers, delimiters) or with another scalar type
//! (`true`, `null`, `42`). Everything else is wrapped in double quotes with
//! `\\`, `\"`, `\n`, `\r` and `\t` escapes, which a decoder reverses exactly.

use crate::options::Delimiter;
use crate::types::Scalar;

/// Render a scalar as it appears in an object field, list item or row cell.
pub fn quote_scalar(scalar: Scalar<'_>, delimiter: Delimiter) -> String {
    match scalar {
        Scalar::Null => "null".to_string(),
        Scalar::Bool(b) => (if b { "true" } else { "false" }).to_string(),
        Scalar::Number(n) => n.to_string(),
        Scalar::String(s) => quote_str(s, delimiter),
    }
}

/// Render a string value, quoting only when [`needs_quoting`] says so.
pub fn quote_str(s: &str, delimiter: Delimiter) -> String {
    if needs_quoting(s, delimiter) {
        escape(s)
    } else {
        s.to_string()
    }
}

/// Whether a string value must be quoted to survive a round trip:
///
/// - empty, or leading/trailing space
/// - contains the active delimiter, `:`, `"`, `\`, `\n`, `\r` or `\t`
/// - spells `true`, `false` or `null`
/// - starts with `- ` (list item), `[` or `{` (array headers)
/// - parses as a number
pub fn needs_quoting(s: &str, delimiter: Delimiter) -> bool {
    if s.is_empty() {
        return true;
    }
    if s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }
    let delim = delimiter.as_char();
    if s
        .chars()
        .any(|c| c == delim || matches!(c, ':' | '"' | '\\' | '\n' | '\r' | '\t'))
    {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if s.starts_with("- ") || s.starts_with('[') || s.starts_with('{') {
        return true;
    }
    looks_numeric(s)
}

/// Anything a float parser would accept as a number, including `05`, `1e3`,
/// `+7`, `inf` and `NaN`. Digit-grouped literals such as `1_000` count too:
/// many readers accept an underscore between two digits.
pub fn looks_numeric(s: &str) -> bool {
    if s.parse::<f64>().is_ok() {
        return true;
    }
    s.contains('_') && underscores_between_digits(s) && s.replace('_', "").parse::<f64>().is_ok()
}

fn underscores_between_digits(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    })
}

/// Wrap in double quotes, escaping backslash, quote and the three whitespace
/// control characters.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

/// Render an object key. Identifiers matching `^[A-Za-z_][A-Za-z0-9_.]*$`
/// stay bare; every other key is quoted with the same escapes as values.
pub fn quote_key(key: &str) -> String {
    if is_bare_key(key) {
        key.to_string()
    } else {
        escape(key)
    }
}

fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}
