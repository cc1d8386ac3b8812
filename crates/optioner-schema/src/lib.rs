//! # optioner-schema — Validators from Literal Templates
//!
//! Compiles a plain example structure into a validator that fills in the
//! example's values as defaults, type-checks inputs against the kind of
//! each literal, and, in strict mode, requires inputs to match the
//! literals exactly.
//!
//! ```
//! use optioner_schema::{Optioner, Options, Rule, Spec};
//! use serde_json::json;
//!
//! let spec = Spec::from(json!({"color": "red", "range": [100, 200]}))
//!     .with("size", Rule::integer().min(1).max(5).default(3));
//! let optioner = Optioner::new(spec, Options::default()).unwrap();
//!
//! let out = optioner.check(&json!({"range": [50]})).unwrap();
//! assert_eq!(out, json!({"color": "red", "size": 3, "range": [50, 200]}));
//! assert!(optioner.check(&json!({"size": 6})).is_err());
//! ```
//!
//! ## Pipeline
//!
//! - [`compile`] turns a [`Spec`] into a JSON Schema document and records
//!   every sequence location in a [`PathRegistry`].
//! - [`Optioner`] validates with the `jsonschema` crate. Sequences are
//!   encoded as index-keyed mappings around each call by the codec in
//!   `optioner-core`, re-exported here.
//!
//! ## Crate Policy
//!
//! - Depends only on `optioner-core` internally.
//! - Validation failures are returned, never panicked on, and carry the
//!   engine's violations without translation.

pub mod compile;
pub mod config;
pub mod defaults;
pub mod error;
pub mod rule;
pub mod spec;
pub mod validate;

pub use compile::{compile, leaf_rule};
pub use config::Options;
pub use error::{OptionerError, ValidationViolations, Violation};
pub use rule::Rule;
pub use spec::{Leaf, Spec};
pub use validate::{Optioner, Outcome};

pub use optioner_core::{inject, to_mapping_form, to_sequence_form, PathRegistry};
