//! Array layout classification.
//!
//! Each array is classified once, independent of how deep it sits:
//!
//! 1. **Tabular**: non-empty, all elements are objects sharing the first
//!    element's key set, all field values scalar. Rendered as a header plus
//!    one delimited row per element.
//! 2. **Primitive list**: all elements scalar (the empty array included).
//!    Rendered inline on the header line.
//! 3. **Mixed list**: anything else, rendered as `- ` items.

use crate::types::{Map, Value};

/// Layout chosen for one array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayLayout<'a> {
    /// Header fields in the first element's key order.
    Tabular { fields: Vec<&'a str> },
    PrimitiveList,
    MixedList,
}

/// Pick the layout for `items`. Tabular wins over primitive list, which wins
/// over mixed list.
pub fn classify(items: &[Value]) -> ArrayLayout<'_> {
    if let Some(fields) = tabular_fields(items) {
        return ArrayLayout::Tabular { fields };
    }
    if items.iter().all(Value::is_scalar) {
        return ArrayLayout::PrimitiveList;
    }
    ArrayLayout::MixedList
}

/// Header fields if `items` qualifies for tabular layout.
///
/// Key sets are compared as sets: `{"a":1,"b":2}` and `{"b":3,"a":4}` share
/// a table, with rows reordered to the first element's field order. Objects
/// without keys never form a table since their rows would be blank.
fn tabular_fields(items: &[Value]) -> Option<Vec<&str>> {
    let (first, rest) = items.split_first()?;
    let first = first.as_object()?;
    if first.is_empty() || !is_flat(first) {
        return None;
    }
    for item in rest {
        let obj = item.as_object()?;
        // Keys are unique, so equal length plus containment is set equality.
        if obj.len() != first.len() || !first.keys().all(|k| obj.contains_key(k)) {
            return None;
        }
        if !is_flat(obj) {
            return None;
        }
    }
    Some(first.keys().collect())
}

fn is_flat(map: &Map) -> bool {
    map.values().all(Value::is_scalar)
}
