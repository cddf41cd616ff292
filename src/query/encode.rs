//! Recursive flattening of nested query options into bracketed key pairs.

use serde_json::Value;
use url::form_urlencoded;

/// Flatten a nested options value into ordered `(key, value)` pairs.
///
/// Mappings recurse per entry with `parent[child]` keys, sequences recurse
/// per element with the numeric index as the segment, scalars emit one pair
/// with the string form of the value. `null` leaves are skipped entirely.
///
/// Pair order follows the iteration order of the input; `serde_json` is
/// built with `preserve_order`, so that is insertion order. The backend does
/// not care, but cache keys derived from the encoding do.
pub fn pairs(params: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            push_pairs(&mut out, key, value);
        }
    }
    out
}

fn push_pairs(out: &mut Vec<(String, String)>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(out, &format!("{}[{}]", key, index), item);
            }
        }
        Value::Object(map) => {
            for (nested_key, nested_value) in map {
                push_pairs(out, &format!("{}[{}]", key, nested_key), nested_value);
            }
        }
        Value::String(s) => out.push((key.to_string(), s.clone())),
        other => out.push((key.to_string(), other.to_string())),
    }
}

/// Serialize a nested options value into a URL-encoded query string.
///
/// Returns an empty string for an empty (or non-object) input; callers omit
/// the `?` in that case.
pub fn encode(params: &Value) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs(params) {
        serializer.append_pair(&key, &value);
    }
    serializer.finish()
}
