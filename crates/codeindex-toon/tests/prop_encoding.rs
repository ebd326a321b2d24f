/// Property-based tests for quoting and encoder output shape.
///
/// Uses `proptest` to generate strings and value trees and checks that:
/// - every quoted string decodes back to the original
/// - bare strings never contain structural characters
/// - encoded documents have no trailing newline or trailing spaces
/// - tabular arrays produce exactly one row per element
use codeindex_toon::{encode_with_options, quote_key, quote_str, Delimiter, EncodeOptions, Map, Number, Value};
use proptest::prelude::*;

fn unquote(text: &str) -> String {
    let Some(inner) = text
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    else {
        return text.to_string();
    };
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn arb_delimiter() -> impl Strategy<Value = Delimiter> {
    prop_oneof![
        Just(Delimiter::Comma),
        Just(Delimiter::Tab),
        Just(Delimiter::Pipe),
    ]
}

/// Strings biased toward characters the quoting rules care about.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,20}",
        prop::string::string_regex("[a-z0-9:,|\\[\\]{}\\-\\. \"\\\\\n\r\t]{0,16}").unwrap(),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("42".to_string()),
        Just("- item".to_string()),
        any::<String>(),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-zA-Z_][a-zA-Z0-9_.]{0,10}",
        1 => arb_string(),
    ]
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(Number::Int(n))),
        (-1.0e6f64..1.0e6f64).prop_map(|f| Value::Number(Number::Float(f))),
        arb_string().prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((arb_key(), inner), 0..6)
                .prop_map(|pairs| Value::Object(pairs.into_iter().collect::<Map>())),
        ]
    })
}

/// Uniform flat objects: the same keys in every row.
fn arb_table() -> impl Strategy<Value = (Vec<String>, Value)> {
    prop::collection::btree_set("[a-z]{1,6}", 1..5).prop_flat_map(|keys| {
        let keys: Vec<String> = keys.into_iter().collect();
        let width = keys.len();
        prop::collection::vec(prop::collection::vec(arb_scalar(), width), 1..8).prop_map(
            move |rows| {
                let items = rows
                    .into_iter()
                    .map(|cells| Value::Object(keys.iter().cloned().zip(cells).collect()))
                    .collect();
                (keys.clone(), Value::Array(items))
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_quoted_strings_round_trip(s in arb_string(), d in arb_delimiter()) {
        prop_assert_eq!(unquote(&quote_str(&s, d)), s);
    }

    #[test]
    fn prop_quoted_keys_round_trip(k in arb_key()) {
        prop_assert_eq!(unquote(&quote_key(&k)), k);
    }

    #[test]
    fn prop_bare_strings_are_unambiguous(s in arb_string(), d in arb_delimiter()) {
        let out = quote_str(&s, d);
        if !out.starts_with('"') {
            prop_assert!(!out.is_empty());
            prop_assert!(!out.contains(d.as_char()));
            prop_assert!(!out.contains(':'));
            prop_assert!(!out.contains('\n'));
            prop_assert!(out.parse::<f64>().is_err());
            prop_assert!(!matches!(out.as_str(), "true" | "false" | "null"));
        }
    }

    #[test]
    fn prop_integers_encode_verbatim(n in any::<i64>()) {
        let out = encode_with_options(&Value::from(n), &EncodeOptions::default());
        prop_assert_eq!(out, n.to_string());
    }

    #[test]
    fn prop_output_has_no_trailing_whitespace(
        v in arb_value(),
        d in arb_delimiter(),
        indent in 1usize..5,
    ) {
        let options = EncodeOptions::new().with_delimiter(d).with_indent(indent).unwrap();
        let out = encode_with_options(&v, &options);
        prop_assert!(!out.ends_with('\n'));
        for line in out.split('\n') {
            prop_assert!(!line.ends_with(' '), "trailing space in {:?}", line);
        }
    }

    #[test]
    fn prop_tables_emit_one_row_per_element((keys, table) in arb_table(), d in arb_delimiter()) {
        let len = table.as_array().map_or(0, |items| items.len());
        let mut root = Map::new();
        root.insert("rows", table);
        let options = EncodeOptions::new().with_delimiter(d);
        let out = encode_with_options(&Value::Object(root), &options);

        let mut lines = out.split('\n');
        let header = lines.next().unwrap_or_default();
        let fields = keys.join(d.as_char().to_string().as_str());
        prop_assert!(header.starts_with("rows["), "header was {:?}", header);
        prop_assert!(header.ends_with(&format!("{{{}}}:", fields)), "header was {:?}", header);
        prop_assert_eq!(lines.count(), len);
    }
}
