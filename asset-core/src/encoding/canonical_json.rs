//! Canonical JSON encoding.
//!
//! Canonical JSON recursively sorts every object's keys in byte order over
//! UTF-8 and serializes without insignificant whitespace, so that two
//! logically-identical trees always produce byte-identical output
//! regardless of how they were originally constructed.
//!
//! `serde_json::Map` is backed by a `BTreeMap` unless the `preserve_order`
//! feature is enabled (it is not, here), so any `serde_json::Value::Object`
//! we build already serializes with sorted keys. Canonicalisation therefore
//! only needs to walk the tree and rebuild every object through that map,
//! and serialize with the compact (non-pretty) writer.

use serde_json::Value;

/// Recursively rebuilds `value` so that every nested object is a
/// (already key-sorted) `serde_json::Map`.
///
/// This is a no-op for arrays and scalars beyond recursing into their
/// children; it exists because a `Value` built through certain paths (for
/// example `serde_json::json!` macros with the `preserve_order` feature
/// active in some other crate in the dependency graph) is not guaranteed
/// to already be canonical.
fn canonicalize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted = serde_json::Map::new();
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for key in keys {
                let v = map.get(key).expect("key came from this map");
                sorted.insert(key.clone(), canonicalize_value(v));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize_value).collect()),
        other => other.clone(),
    }
}

/// Serializes `value` into canonical JSON bytes: sorted keys, no
/// insignificant whitespace.
///
/// This is the `canonical-json` function referenced throughout the
/// identifier core and the PROV projection: it is the single place where
/// "the same logical document always produces the same bytes" is
/// guaranteed.
pub fn to_canonical_bytes(value: &Value) -> Vec<u8> {
    let canonical = canonicalize_value(value);
    // `to_vec` is already compact (no pretty-printing whitespace).
    serde_json::to_vec(&canonical).expect("canonicalized Value is always serializable")
}

/// Convenience wrapper that serializes a `Serialize` value to canonical
/// JSON bytes by first going through `serde_json::Value`.
pub fn canonical_bytes_of<T: serde::Serialize>(value: &T) -> Vec<u8> {
    let v = serde_json::to_value(value).expect("value should serialize to JSON");
    to_canonical_bytes(&v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn key_order_does_not_affect_canonical_bytes() {
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});

        assert_eq!(to_canonical_bytes(&a), to_canonical_bytes(&b));
    }

    #[test]
    fn canonical_bytes_contain_no_insignificant_whitespace() {
        let v = json!({"a": 1, "b": [1, 2, 3]});
        let bytes = to_canonical_bytes(&v);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"a":1,"b":[1,2,3]}"#);
    }

    #[test]
    fn nested_objects_are_sorted_recursively() {
        let v = json!({"z": {"y": 1, "x": 2}, "a": 1});
        let bytes = to_canonical_bytes(&v);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, r#"{"a":1,"z":{"x":2,"y":1}}"#);
    }
}
