//! # optioner-core — Sequence Paths and the Sequence/Mapping Codec
//!
//! The validation engine behind `optioner-schema` checks key-value mappings
//! field by field and has no notion of a positional sequence. This crate
//! holds the pieces that bridge that gap:
//!
//! - [`PathRegistry`] — the dotted locations that were ordered sequences in
//!   the literal template a validator was compiled from.
//! - [`inject`] — writes a value at a dotted path, creating intermediate
//!   sequences or mappings as the next segment demands.
//! - [`to_mapping_form`] / [`to_sequence_form`] — encode every registered
//!   sequence as an index-keyed mapping before validation and decode it
//!   back afterwards.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `optioner-*` crates (this is the leaf of the DAG).
//! - Everything here is total: functions return values, never errors.
//!   Malformed paths are resolved by numeric sniffing, not rejected.
//! - Caller data is never mutated; functions take ownership of the working
//!   value and hand it back.

pub mod codec;
pub mod inject;
pub mod path;

pub use codec::{to_mapping_form, to_sequence_form, MAX_SEQUENCE_INDEX};
pub use inject::inject;
pub use path::{join, parse_index, reach, segments, PathRegistry};
