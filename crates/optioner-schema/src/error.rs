//! # Error Types
//!
//! Validation failures carry the engine's violations verbatim: each one
//! names the offending field by its JSON Pointer path in the validated
//! document, the schema keyword that rejected it, and a human-readable
//! message. Paths inside a template sequence appear in their encoded,
//! index-keyed form (`/range/0`).

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use thiserror::Error;

/// Errors raised by `optioner-schema`.
#[derive(Error, Debug, Clone)]
pub enum OptionerError {
    /// The input did not conform to the compiled template.
    #[error("validation failed:\n{violations}")]
    ValidationFailed {
        /// Structured list of individual violations.
        violations: ValidationViolations,
    },

    /// The compiled schema document was rejected by the engine. Only
    /// reachable through malformed hand-written rule fragments.
    #[error("schema build error: {reason}")]
    SchemaBuild {
        /// Reason the engine refused the document.
        reason: String,
    },

    /// A textual template could not be parsed.
    #[error("template load error: {reason}")]
    SpecLoad {
        /// Reason the template could not be parsed.
        reason: String,
    },
}

impl OptionerError {
    /// The violations behind a validation failure, if this is one.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::ValidationFailed { violations } => Some(violations),
            _ => None,
        }
    }
}

/// A single validation violation with structured context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer path to the violating field in the instance.
    pub instance_path: String,
    /// JSON Pointer path within the schema that triggered the error.
    pub schema_path: String,
    /// Human-readable description of the violation.
    pub message: String,
    /// The field the violation is about, when the engine names one that
    /// is not the last instance-path segment (missing or unknown keys).
    pub property: Option<String>,
}

impl Violation {
    /// The schema keyword that rejected the value, e.g. `type`, `const`,
    /// `required`, `additionalProperties` or `maximum`.
    pub fn keyword(&self) -> &str {
        self.schema_path.rsplit('/').next().unwrap_or_default()
    }

    /// The field this violation names: the missing or unknown property
    /// for `required` and `additionalProperties`, otherwise the last
    /// segment of the instance path. `None` for the root value.
    pub fn field(&self) -> Option<&str> {
        self.property.as_deref().or_else(|| {
            self.instance_path
                .rsplit('/')
                .next()
                .filter(|segment| !segment.is_empty())
        })
    }
}

impl From<jsonschema::ValidationError<'_>> for Violation {
    fn from(error: jsonschema::ValidationError<'_>) -> Self {
        let property = match &error.kind {
            ValidationErrorKind::Required { property } => property.as_str().map(str::to_string),
            ValidationErrorKind::AdditionalProperties { unexpected } => unexpected.first().cloned(),
            _ => None,
        };
        Self {
            instance_path: error.instance_path.to_string(),
            schema_path: error.schema_path.to_string(),
            message: error.to_string(),
            property,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Collection of validation violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation reported by the engine.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
