//! # Validation Rules
//!
//! A [`Rule`] is a JSON Schema fragment for one field plus a flag saying
//! whether the field must be present. Templates embed rules wherever a
//! plain literal is not expressive enough:
//!
//! ```
//! # use optioner_schema::Rule;
//! let size = Rule::integer().min(1).max(5).default(3);
//! assert_eq!(size.default_value(), Some(&serde_json::json!(3)));
//! ```
//!
//! Rules are passed through compilation unchanged. The compiler also uses
//! them to express the rules it infers from literals.

use serde_json::{Map, Value};

/// A pre-built validation rule for a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    schema: Map<String, Value>,
    required: bool,
}

impl Rule {
    /// Wrap a hand-written JSON Schema fragment.
    pub fn from_schema(schema: Map<String, Value>) -> Self {
        Self {
            schema,
            required: false,
        }
    }

    fn typed(kind: &str) -> Self {
        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::String(kind.to_string()));
        Self::from_schema(schema)
    }

    /// Accepts integral numbers.
    pub fn integer() -> Self {
        Self::typed("integer")
    }

    /// Accepts any number, integral or not.
    pub fn number() -> Self {
        Self::typed("number")
    }

    /// Accepts strings, including the empty string.
    pub fn string() -> Self {
        Self::typed("string")
    }

    /// Accepts `true` and `false`.
    pub fn boolean() -> Self {
        Self::typed("boolean")
    }

    /// Accepts mappings.
    pub fn object() -> Self {
        Self::typed("object")
    }

    /// Accepts anything.
    pub fn any() -> Self {
        Self::from_schema(Map::new())
    }

    /// Accepts exactly `value`.
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::any().with("const", value)
    }

    /// Value inserted when the field is absent.
    pub fn default(self, value: impl Into<Value>) -> Self {
        self.with("default", value)
    }

    /// Inclusive lower bound for numbers.
    pub fn min(self, value: impl Into<Value>) -> Self {
        self.with("minimum", value)
    }

    /// Inclusive upper bound for numbers.
    pub fn max(self, value: impl Into<Value>) -> Self {
        self.with("maximum", value)
    }

    /// Minimum string length.
    pub fn min_length(self, length: u64) -> Self {
        self.with("minLength", length)
    }

    /// Maximum string length.
    pub fn max_length(self, length: u64) -> Self {
        self.with("maxLength", length)
    }

    /// Regular expression strings must match.
    pub fn pattern(self, pattern: impl Into<String>) -> Self {
        self.with("pattern", pattern.into())
    }

    /// Restrict the field to one of `values`.
    pub fn one_of<I, V>(self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        self.with("enum", values)
    }

    /// The field must be present.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set an arbitrary schema keyword.
    pub fn with(mut self, keyword: &str, value: impl Into<Value>) -> Self {
        self.schema.insert(keyword.to_string(), value.into());
        self
    }

    /// Whether the field must be present.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The default applied when the field is absent.
    pub fn default_value(&self) -> Option<&Value> {
        self.schema.get("default")
    }

    /// The schema fragment.
    pub fn as_schema(&self) -> &Map<String, Value> {
        &self.schema
    }

    /// Consume the rule, returning its schema fragment as a JSON value.
    pub fn into_schema(self) -> Value {
        Value::Object(self.schema)
    }
}
