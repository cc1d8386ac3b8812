//! # Path Injection
//!
//! Sets a value at a dotted path inside a JSON value, creating whatever
//! intermediate containers are missing along the way. The container
//! created for a missing step is a sequence when the following segment is
//! an index and a mapping otherwise.

use serde_json::{Map, Value};

use crate::path::parse_index;

/// Write `value` at `path` inside `root` and return the updated root.
///
/// - The empty path replaces the whole root: `value` is returned as-is.
/// - A `null` root cannot be injected into and is returned unchanged.
/// - Existing intermediate containers are reused; missing (or `null`) steps
///   get a fresh sequence or mapping depending on the next segment.
/// - Writing past the end of a sequence pads it with `null`.
/// - Steps that land on a scalar, or a non-index key on a sequence, leave
///   the root as it was.
pub fn inject(path: &str, value: Value, root: Value) -> Value {
    if path.is_empty() {
        return value;
    }
    if root.is_null() {
        return root;
    }

    let mut root = root;
    let segments: Vec<&str> = path.split('.').collect();
    place(&mut root, &segments, value);
    root
}

fn place(container: &mut Value, segments: &[&str], value: Value) {
    let Some((head, rest)) = segments.split_first() else {
        return;
    };

    let Some(next) = rest.first() else {
        if let Some(slot) = slot(container, head) {
            *slot = value;
        }
        return;
    };

    if let Some(child) = slot(container, head) {
        if child.is_null() {
            *child = if parse_index(next).is_some() {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
        }
        place(child, rest, value);
    }
}

/// The slot for `key` in `container`, created as `null` if missing.
fn slot<'a>(container: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match container {
        Value::Object(map) => Some(map.entry(key).or_insert(Value::Null)),
        Value::Array(items) => {
            let index = parse_index(key)?;
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            items.get_mut(index)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_path_replaces_root() {
        assert_eq!(inject("", json!({"x": 1}), json!({"y": 1})), json!({"x": 1}));
        assert_eq!(inject("", json!({"0": 1}), json!([1])), json!({"0": 1}));
        assert_eq!(inject("", json!(7), Value::Null), json!(7));
    }

    #[test]
    fn test_null_root_is_untouched() {
        assert_eq!(inject("a", json!(1), Value::Null), Value::Null);
    }

    #[test]
    fn test_inject_into_mappings() {
        assert_eq!(inject("a", json!(1), json!({})), json!({"a": 1}));
        assert_eq!(inject("a.b", json!(2), json!({"a": {}})), json!({"a": {"b": 2}}));
        assert_eq!(inject("a.b", json!(2), json!({})), json!({"a": {"b": 2}}));
    }

    #[test]
    fn test_inject_into_sequences() {
        assert_eq!(inject("0", json!(1), json!([])), json!([1]));
        assert_eq!(inject("a.0", json!(1), json!({"a": [2, 2]})), json!({"a": [1, 2]}));
        assert_eq!(inject("a.0", json!(1), json!({})), json!({"a": [1]}));
        assert_eq!(
            inject("a.0.b", json!(1), json!({"a": [{"c": 2}]})),
            json!({"a": [{"c": 2, "b": 1}]})
        );
    }

    #[test]
    fn test_inject_pads_sequences() {
        assert_eq!(inject("a.2", json!(1), json!({})), json!({"a": [null, null, 1]}));
    }

    #[test]
    fn test_numeric_key_on_existing_mapping() {
        assert_eq!(
            inject("a.0", json!(1), json!({"a": {"1": 2}})),
            json!({"a": {"0": 1, "1": 2}})
        );
    }

    #[test]
    fn test_null_intermediate_is_replaced() {
        assert_eq!(inject("a.b", json!(1), json!({"a": null})), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_scalar_intermediate_is_left_alone() {
        assert_eq!(inject("a.b", json!(1), json!({"a": 5})), json!({"a": 5}));
        assert_eq!(inject("x", json!(1), json!([1])), json!([1]));
        assert_eq!(inject("a", json!(1), json!("s")), json!("s"));
    }
}
