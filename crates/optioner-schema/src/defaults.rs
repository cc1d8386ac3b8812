//! Default application.
//!
//! `jsonschema` checks documents but never fills them in, so defaults are
//! applied in a separate pass before validation. The pass reads the
//! `properties` and `default` keywords of the compiled document: an absent
//! property with a default gets a fresh clone of it, and every property
//! that is (now) a mapping is descended into, so defaulted mappings pick
//! up their children's defaults too.

use serde_json::Value;

/// Fill absent properties of `value` from the defaults in `schema`.
pub fn apply_defaults(schema: &Value, value: &mut Value) {
    let (Some(properties), Value::Object(map)) =
        (schema.get("properties").and_then(Value::as_object), value)
    else {
        return;
    };

    for (key, property) in properties {
        if !map.contains_key(key) {
            if let Some(default) = property.get("default") {
                map.insert(key.clone(), default.clone());
            }
        }
        if let Some(child) = map.get_mut(key) {
            apply_defaults(property, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fills_absent_keys() {
        let schema = json!({
            "properties": {
                "a": {"default": 1},
                "b": {"type": "string"}
            }
        });
        let mut value = json!({});
        apply_defaults(&schema, &mut value);
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_present_keys_win() {
        let schema = json!({"properties": {"a": {"default": 1}}});
        let mut value = json!({"a": 2, "x": 3});
        apply_defaults(&schema, &mut value);
        assert_eq!(value, json!({"a": 2, "x": 3}));
    }

    #[test]
    fn test_defaulted_mapping_gets_child_defaults() {
        let schema = json!({
            "properties": {
                "d": {
                    "default": {},
                    "properties": {"e": {"default": {}, "properties": {"f": {"default": 3}}}}
                }
            }
        });
        let mut value = json!({});
        apply_defaults(&schema, &mut value);
        assert_eq!(value, json!({"d": {"e": {"f": 3}}}));
    }

    #[test]
    fn test_non_mapping_values_are_left_for_validation() {
        let schema = json!({"properties": {"d": {"properties": {"f": {"default": 3}}}}});
        let mut value = json!({"d": 7});
        apply_defaults(&schema, &mut value);
        assert_eq!(value, json!({"d": 7}));
    }
}
