//! # Templates
//!
//! A [`Spec`] is the literal example structure a validator is compiled
//! from. Its shape is fixed when the value is built: every node is a
//! mapping, an ordered sequence, or a leaf. The compiler matches on that
//! tag; it never probes runtime types.
//!
//! Plain JSON converts directly:
//!
//! ```
//! # use optioner_schema::{Rule, Spec};
//! # use serde_json::json;
//! let spec = Spec::from(json!({"color": "red", "range": [100, 200]}))
//!     .with("size", Rule::integer().min(1).max(5).default(3));
//! assert!(matches!(spec, Spec::Mapping(_)));
//! ```

use std::collections::BTreeMap;

use optioner_core::parse_index;
use serde_json::Value;

use crate::error::OptionerError;
use crate::rule::Rule;

/// A node of a literal template.
#[derive(Debug, Clone, PartialEq)]
pub enum Spec {
    /// Named children. Compiles to a mapping rule.
    Mapping(BTreeMap<String, Spec>),
    /// Positional children. Compiles to a mapping rule keyed `"0"`, `"1"`, …
    /// and registers the location as a sequence path.
    Sequence(Vec<Spec>),
    /// A single field.
    Leaf(Leaf),
}

/// A template leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Leaf {
    /// No value: the field is optional and gets no default.
    Undefined,
    /// A scalar literal. Its kind becomes the field's type and the literal
    /// its default.
    Literal(Value),
    /// A pre-built rule, used as-is.
    Rule(Rule),
    /// An opaque default accepted without type checking. Whatever the
    /// caller supplies replaces it.
    Any(Value),
}

impl Spec {
    /// A mapping node from `(key, child)` pairs.
    pub fn mapping<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Spec)>,
    {
        Self::Mapping(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// A sequence node.
    pub fn sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Spec>,
    {
        Self::Sequence(items.into_iter().collect())
    }

    /// An optional field without a default.
    pub fn undefined() -> Self {
        Self::Leaf(Leaf::Undefined)
    }

    /// A field defaulting to `value` that accepts anything.
    pub fn any(value: impl Into<Value>) -> Self {
        Self::Leaf(Leaf::Any(value.into()))
    }

    /// Replace the child at `key`.
    ///
    /// On a mapping the key is inserted or replaced. On a sequence `key`
    /// must be an index no greater than the length; an index equal to the
    /// length appends. Anything else leaves the node unchanged.
    pub fn with(mut self, key: &str, child: impl Into<Spec>) -> Self {
        match &mut self {
            Self::Mapping(entries) => {
                entries.insert(key.to_string(), child.into());
            }
            Self::Sequence(items) => match parse_index(key) {
                Some(i) if i < items.len() => items[i] = child.into(),
                Some(i) if i == items.len() => items.push(child.into()),
                _ => {}
            },
            Self::Leaf(_) => {}
        }
        self
    }

    /// Parse a template from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `OptionerError::SpecLoad` if the text is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, OptionerError> {
        let value: Value = serde_json::from_str(text).map_err(|e| OptionerError::SpecLoad {
            reason: format!("invalid JSON: {e}"),
        })?;
        Ok(value.into())
    }

    /// Parse a template from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `OptionerError::SpecLoad` if the text is not valid YAML or
    /// has mapping keys that are not strings.
    pub fn from_yaml_str(text: &str) -> Result<Self, OptionerError> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| OptionerError::SpecLoad {
            reason: format!("invalid YAML template: {e}"),
        })?;
        Ok(value.into())
    }
}

impl From<Value> for Spec {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect()),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Into::into).collect()),
            scalar => Self::Leaf(Leaf::Literal(scalar)),
        }
    }
}

impl From<Rule> for Spec {
    fn from(rule: Rule) -> Self {
        Self::Leaf(Leaf::Rule(rule))
    }
}

impl From<Leaf> for Spec {
    fn from(leaf: Leaf) -> Self {
        Self::Leaf(leaf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_value() {
        let spec = Spec::from(json!({"a": 1, "b": [true, null]}));
        let expected = Spec::mapping([
            ("a", Spec::Leaf(Leaf::Literal(json!(1)))),
            (
                "b",
                Spec::sequence([
                    Spec::Leaf(Leaf::Literal(json!(true))),
                    Spec::Leaf(Leaf::Literal(Value::Null)),
                ]),
            ),
        ]);
        assert_eq!(spec, expected);
    }

    #[test]
    fn test_with_on_mapping_and_sequence() {
        let spec = Spec::from(json!({"a": [1]}))
            .with("b", Rule::string())
            .with("a", Spec::from(json!([1])).with("1", Spec::any("x")).with("5", Spec::undefined()));
        let Spec::Mapping(entries) = spec else {
            panic!("expected mapping");
        };
        assert_eq!(entries["b"], Spec::from(Rule::string()));
        assert_eq!(
            entries["a"],
            Spec::sequence([Spec::from(json!(1)), Spec::any("x")])
        );
    }

    #[test]
    fn test_from_json_str() {
        let spec = Spec::from_json_str(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(spec, Spec::from(json!({"a": [1, 2]})));

        let err = Spec::from_json_str("{").unwrap_err();
        assert!(matches!(err, OptionerError::SpecLoad { .. }));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
color: red
size: 3
ratio: 1.5
range:
  - 100
  - 200
"#;
        let spec = Spec::from_yaml_str(yaml).unwrap();
        assert_eq!(
            spec,
            Spec::from(json!({"color": "red", "size": 3, "ratio": 1.5, "range": [100, 200]}))
        );
    }

    #[test]
    fn test_from_yaml_str_rejects_complex_keys() {
        let err = Spec::from_yaml_str("? [a, b]\n: 1\n").unwrap_err();
        assert!(matches!(err, OptionerError::SpecLoad { .. }));
    }
}
