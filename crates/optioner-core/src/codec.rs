//! # Sequence/Mapping Codec
//!
//! Before validation every registered sequence is rewritten as a mapping
//! keyed by its stringified indices (`[a, b]` becomes `{"0": a, "1": b}`),
//! so a mapping-only engine can check and default each position. After
//! validation the mappings are turned back into sequences.
//!
//! Each registered path is handled on its own; the order of the registry
//! does not affect the result. Both directions are idempotent: encoding
//! skips paths that already hold a mapping and decoding skips paths that
//! already hold a sequence.
//!
//! ## Lossy decode
//!
//! Decoding keeps only keys that are plain non-negative integers. Keys such
//! as `-1` or `x` have no sequence position and are dropped (logged at
//! `debug`). An index is kept when it is at most [`MAX_SEQUENCE_INDEX`] or
//! the number of entries, whichever is larger, so a lone key like
//! `"4000000000"` cannot force a huge allocation while dense sequences of
//! any length decode intact. Skipped indices are filled with `null`.

use serde_json::{Map, Value};

use crate::inject::inject;
use crate::path::{parse_index, reach, PathRegistry};

/// Largest index the decoder materialises for sparse mappings. Mappings
/// with more entries than this may use indices up to their entry count.
pub const MAX_SEQUENCE_INDEX: usize = 1 << 16;

/// Encode every sequence at a registered path as an index-keyed mapping.
///
/// Paths that are absent, or hold anything other than a sequence, are left
/// untouched. A `null` value is returned as-is.
pub fn to_mapping_form(value: Value, registry: &PathRegistry) -> Value {
    if value.is_null() {
        return value;
    }

    let mut work = value;
    for path in registry {
        let encoded = match reach(&work, path) {
            Some(Value::Array(items)) => Value::Object(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| (i.to_string(), item.clone()))
                    .collect(),
            ),
            _ => continue,
        };
        work = inject(path, encoded, work);
    }
    work
}

/// Decode every index-keyed mapping at a registered path back into a
/// sequence.
///
/// Paths that already hold a sequence, are absent, or hold a scalar are
/// left untouched. A `null` value is returned as-is.
pub fn to_sequence_form(value: Value, registry: &PathRegistry) -> Value {
    if value.is_null() {
        return value;
    }

    let mut work = value;
    for path in registry {
        let decoded = match reach(&work, path) {
            Some(Value::Object(entries)) => Value::Array(decode_entries(path, entries)),
            _ => continue,
        };
        work = inject(path, decoded, work);
    }
    work
}

fn decode_entries(path: &str, entries: &Map<String, Value>) -> Vec<Value> {
    let limit = MAX_SEQUENCE_INDEX.max(entries.len());
    let mut items = Vec::new();
    for (key, item) in entries {
        match parse_index(key).filter(|&i| i <= limit) {
            Some(index) => {
                if index >= items.len() {
                    items.resize(index + 1, Value::Null);
                }
                items[index] = item.clone();
            }
            None => tracing::debug!(path, key = key.as_str(), "dropping non-index key from sequence"),
        }
    }
    items
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| serde_json::json!(n)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(Value::String),
        ]
    }

    fn json_value() -> impl Strategy<Value = Value> {
        json_leaf().prop_recursive(3, 32, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,8}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    proptest! {
        /// Decoding an encoded sequence yields the original sequence.
        #[test]
        fn round_trip_restores_sequence(items in prop::collection::vec(json_value(), 0..10)) {
            let registry: PathRegistry = ["a"].into_iter().collect();
            let value = serde_json::json!({"a": items});
            let encoded = to_mapping_form(value.clone(), &registry);
            prop_assert!(encoded["a"].is_object());
            prop_assert_eq!(to_sequence_form(encoded, &registry), value);
        }

        /// A sequence at the root survives the round trip.
        #[test]
        fn round_trip_at_root(items in prop::collection::vec(json_value(), 0..10)) {
            let registry: PathRegistry = [""].into_iter().collect();
            let value = Value::Array(items);
            let encoded = to_mapping_form(value.clone(), &registry);
            prop_assert_eq!(to_sequence_form(encoded, &registry), value);
        }

        /// Without a registered path both directions leave the value alone.
        #[test]
        fn unregistered_paths_are_untouched(value in json_value()) {
            let registry = PathRegistry::new();
            prop_assert_eq!(to_mapping_form(value.clone(), &registry), value.clone());
            prop_assert_eq!(to_sequence_form(value.clone(), &registry), value);
        }

        /// Applying either direction twice equals applying it once.
        #[test]
        fn codec_is_idempotent(items in prop::collection::vec(json_value(), 0..10)) {
            let registry: PathRegistry = ["a"].into_iter().collect();
            let value = serde_json::json!({"a": items});
            let once = to_mapping_form(value, &registry);
            let twice = to_mapping_form(once.clone(), &registry);
            prop_assert_eq!(&twice, &once);
            let back = to_sequence_form(once, &registry);
            prop_assert_eq!(to_sequence_form(back.clone(), &registry), back);
        }
    }
}
