//! Compilation options.

use serde::{Deserialize, Serialize};

/// Options recognised when compiling a template.
///
/// Deserialises from the camelCase form used in configuration files:
///
/// ```
/// # use optioner_schema::Options;
/// let options: Options = serde_json::from_str(r#"{"allowUnknown": false}"#).unwrap();
/// assert!(!options.allow_unknown);
/// assert!(!options.must_match_literals);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Let mapping keys the template does not mention pass through
    /// unvalidated. When false, such keys fail validation.
    pub allow_unknown: bool,
    /// Turn every literal into a required, exact-match constraint instead
    /// of a default.
    pub must_match_literals: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            allow_unknown: true,
            must_match_literals: false,
        }
    }
}

impl Options {
    /// Set [`Options::allow_unknown`].
    pub fn with_allow_unknown(mut self, allow_unknown: bool) -> Self {
        self.allow_unknown = allow_unknown;
        self
    }

    /// Set [`Options::must_match_literals`].
    pub fn with_must_match_literals(mut self, must_match_literals: bool) -> Self {
        self.must_match_literals = must_match_literals;
        self
    }
}
