//! # Template Compilation
//!
//! Walks a [`Spec`] and produces the JSON Schema document the engine
//! validates against, plus the [`PathRegistry`] of every location that was
//! a sequence.
//!
//! Every container compiles to a mapping rule:
//!
//! ```json
//! {"type": "object", "properties": {...}, "default": {}}
//! ```
//!
//! with `"additionalProperties": false` when unknown keys are disallowed
//! and a `"required"` list when any child must be present. Sequences use
//! their stringified indices as property names. Leaves compile through
//! [`leaf_rule`].

use optioner_core::{join, PathRegistry};
use serde_json::{Map, Number, Value};

use crate::config::Options;
use crate::rule::Rule;
use crate::spec::{Leaf, Spec};

/// Compile `spec` into a schema document and its sequence path registry.
///
/// A leaf at the root has no fields to describe and compiles to an empty
/// mapping rule.
pub fn compile(spec: &Spec, options: &Options) -> (Value, PathRegistry) {
    let mut compiler = Compiler {
        options,
        paths: PathRegistry::new(),
    };
    let schema = compiler.node(spec, "");
    tracing::debug!(
        sequence_paths = compiler.paths.len(),
        allow_unknown = options.allow_unknown,
        must_match_literals = options.must_match_literals,
        "compiled template"
    );
    (schema, compiler.paths)
}

struct Compiler<'a> {
    options: &'a Options,
    paths: PathRegistry,
}

impl Compiler<'_> {
    fn node(&mut self, spec: &Spec, path: &str) -> Value {
        match spec {
            Spec::Mapping(entries) => {
                self.container(entries.iter().map(|(k, v)| (k.clone(), v)), path)
            }
            Spec::Sequence(items) => {
                self.paths.register(path);
                self.container(items.iter().enumerate().map(|(i, v)| (i.to_string(), v)), path)
            }
            Spec::Leaf(_) => self.container(std::iter::empty(), path),
        }
    }

    fn container<'s>(
        &mut self,
        entries: impl Iterator<Item = (String, &'s Spec)>,
        path: &str,
    ) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for (key, child) in entries {
            let schema = match child {
                Spec::Mapping(_) | Spec::Sequence(_) => {
                    if key.contains('.') {
                        tracing::warn!(
                            path,
                            key = key.as_str(),
                            "template key contains '.'; sequences beneath it cannot be located"
                        );
                    }
                    self.node(child, &join(path, &key))
                }
                Spec::Leaf(leaf) => {
                    let rule = leaf_rule(leaf, self.options);
                    if rule.is_required() {
                        required.push(Value::String(key.clone()));
                    }
                    rule.into_schema()
                }
            };
            properties.insert(key, schema);
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), Value::from("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !self.options.allow_unknown {
            schema.insert("additionalProperties".to_string(), Value::Bool(false));
        }
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema.insert("default".to_string(), Value::Object(Map::new()));
        Value::Object(schema)
    }
}

/// The rule a template leaf compiles to.
///
/// - pre-built rules pass through unchanged;
/// - `Undefined` is optional with no default, in every mode;
/// - with `must_match_literals`, any other leaf must be present and equal
///   to the literal;
/// - otherwise the literal's kind becomes the type and the literal the
///   default: `null` and `Any` accept anything, integral numbers require
///   integers, other numbers accept any number.
pub fn leaf_rule(leaf: &Leaf, options: &Options) -> Rule {
    match leaf {
        Leaf::Rule(rule) => rule.clone(),
        Leaf::Undefined => Rule::any(),
        Leaf::Literal(value) | Leaf::Any(value) if options.must_match_literals => {
            Rule::literal(value.clone()).required()
        }
        Leaf::Any(value) => Rule::any().default(value.clone()),
        Leaf::Literal(value) => literal_rule(value),
    }
}

fn literal_rule(value: &Value) -> Rule {
    let rule = match value {
        Value::Bool(_) => Rule::boolean(),
        Value::Number(n) if is_integral(n) => Rule::integer(),
        Value::Number(_) => Rule::number(),
        Value::String(_) => Rule::string(),
        Value::Null | Value::Array(_) | Value::Object(_) => Rule::any(),
    };
    rule.default(value.clone())
}

fn is_integral(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}
