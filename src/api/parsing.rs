//! Total predicates over untyped JSON.
//!
//! The interaction body is attacker-controlled, so every field access in
//! [`super::interaction`] is preceded by one of these checks. None of them
//! panic, whatever the input.

use serde_json::Value;

/// Primitive JSON kinds [`is_of_type`] can assert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    String,
    Number,
    Bool,
    Object,
    Array,
}

/// True iff `value` is an object with `key` present (any value, even `null`).
#[must_use]
pub fn is_object_with_key(value: &Value, key: &str) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(key))
}

/// True iff `value` is non-null and of the requested kind.
#[must_use]
pub fn is_of_type(value: &Value, kind: JsonKind) -> bool {
    match kind {
        JsonKind::String => value.is_string(),
        JsonKind::Number => value.is_number(),
        JsonKind::Bool => value.is_boolean(),
        JsonKind::Object => value.is_object(),
        JsonKind::Array => value.is_array(),
    }
}

#[must_use]
pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        if !is_object_with_key(cur, key) {
            return None;
        }
        cur = cur.get(*key)?;
    }
    Some(cur)
}

/// Case-insensitive header lookup on an API Gateway `headers` object.
///
/// An exact match on `name` wins; otherwise the first string value whose key
/// matches ignoring ASCII case, in the map's key order. The same object
/// always resolves to the same value.
pub fn resolve_header<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    let map = headers.as_object()?;
    map.get(name).and_then(Value::as_str).or_else(|| {
        map.iter()
            .filter(|(key, _)| key.eq_ignore_ascii_case(name))
            .find_map(|(_, value)| value.as_str())
    })
}
