//! # Validation
//!
//! [`Optioner`] is a compiled template. Each call runs the same pipeline:
//!
//! 1. clone the input (`null` becomes `{}`), so caller data is never
//!    mutated;
//! 2. encode registered sequences as index-keyed mappings;
//! 3. apply the template's defaults;
//! 4. check the result with the compiled `jsonschema` validator;
//! 5. on success, decode the mappings back into sequences.
//!
//! Failures carry the engine's violations unchanged and no value.
//!
//! ## Thread Safety
//!
//! `Optioner` is `Send + Sync`. The compiled schema and path registry are
//! immutable after construction and every call works on its own copy of
//! the input, so one instance can serve concurrent callers.

use std::fmt;

use jsonschema::Validator;
use optioner_core::{to_mapping_form, to_sequence_form, PathRegistry};
use serde_json::{Map, Value};

use crate::compile::compile;
use crate::config::Options;
use crate::defaults::apply_defaults;
use crate::error::{OptionerError, ValidationViolations, Violation};
use crate::spec::Spec;

/// The result record of a validation call: either an error or a value.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The failure, if validation failed.
    pub error: Option<OptionerError>,
    /// The validated value with defaults applied, if validation succeeded.
    pub value: Option<Value>,
}

impl Outcome {
    /// Whether validation succeeded.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns the recorded error if validation failed.
    pub fn into_result(self) -> Result<Value, OptionerError> {
        match (self.error, self.value) {
            (Some(error), _) => Err(error),
            (None, value) => Ok(value.unwrap_or(Value::Null)),
        }
    }
}

impl From<Result<Value, OptionerError>> for Outcome {
    fn from(result: Result<Value, OptionerError>) -> Self {
        match result {
            Ok(value) => Self {
                error: None,
                value: Some(value),
            },
            Err(error) => Self {
                error: Some(error),
                value: None,
            },
        }
    }
}

/// A validator compiled from a literal template.
pub struct Optioner {
    options: Options,
    schema: Value,
    paths: PathRegistry,
    validator: Validator,
}

impl Optioner {
    /// Compile `spec` into a validator.
    ///
    /// # Errors
    ///
    /// Returns `OptionerError::SchemaBuild` if the engine rejects the
    /// compiled document, which only happens when a hand-written rule
    /// fragment is not valid JSON Schema.
    pub fn new(spec: impl Into<Spec>, options: Options) -> Result<Self, OptionerError> {
        let spec = spec.into();
        let (schema, paths) = compile(&spec, &options);

        let mut opts = jsonschema::options();
        opts.with_draft(jsonschema::Draft::Draft202012);
        let validator = opts
            .build(&schema)
            .map_err(|e| OptionerError::SchemaBuild {
                reason: e.to_string(),
            })?;

        Ok(Self {
            options,
            schema,
            paths,
            validator,
        })
    }

    /// The compiled JSON Schema document.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// The locations that were sequences in the template.
    pub fn paths(&self) -> &PathRegistry {
        &self.paths
    }

    /// The options this validator was compiled with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate `input`, returning the outcome as a record.
    pub fn validate(&self, input: &Value) -> Outcome {
        self.run(input).into()
    }

    /// Validate `input` and hand the outcome to `done` as `(error, value)`.
    ///
    /// `done` is invoked before this method returns.
    pub fn validate_with<F>(&self, input: &Value, done: F)
    where
        F: FnOnce(Option<OptionerError>, Option<Value>),
    {
        let Outcome { error, value } = self.validate(input);
        done(error, value);
    }

    /// Validate `input`, returning the value with defaults applied.
    ///
    /// # Errors
    ///
    /// Returns `OptionerError::ValidationFailed` with the engine's
    /// violations if `input` does not conform.
    pub fn check(&self, input: &Value) -> Result<Value, OptionerError> {
        self.run(input)
    }

    fn run(&self, input: &Value) -> Result<Value, OptionerError> {
        let work = if input.is_null() {
            Value::Object(Map::new())
        } else {
            input.clone()
        };

        let mut work = to_mapping_form(work, &self.paths);
        apply_defaults(&self.schema, &mut work);

        let violations: Vec<Violation> = self.validator.iter_errors(&work).map(Violation::from).collect();
        if !violations.is_empty() {
            tracing::trace!(violations = violations.len(), "input rejected");
            return Err(OptionerError::ValidationFailed {
                violations: ValidationViolations::new(violations),
            });
        }

        tracing::trace!("input accepted");
        Ok(to_sequence_form(work, &self.paths))
    }
}

impl fmt::Debug for Optioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optioner")
            .field("options", &self.options)
            .field("schema", &self.schema)
            .field("paths", &self.paths)
            .finish_non_exhaustive()
    }
}
