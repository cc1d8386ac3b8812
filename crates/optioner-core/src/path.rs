//! # Dotted Paths
//!
//! Locations inside a JSON value are written as dotted strings: `a.b.0.c`.
//! The empty string denotes the root value itself. A segment that parses as
//! a non-negative integer addresses a sequence position; every other
//! segment is a mapping key.
//!
//! Keys that themselves contain `.` cannot be addressed: `a.b` always means
//! key `b` inside key `a`. A sequence beneath such a key is never encoded,
//! so the compiler warns when a template has one.

use serde_json::Value;

/// Split a dotted path into its segments. The empty path has none.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(move |_| !path.is_empty())
}

/// Extend `parent` with one more segment.
pub fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Parse a segment as a sequence index.
///
/// Only plain ASCII digit strings qualify; `-1`, `+1`, `1a` and the empty
/// string are mapping keys.
pub fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Look up the value at `path`, descending through mappings by key and
/// through sequences by index.
pub fn reach<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    segments(path).try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => parse_index(segment).and_then(|i| items.get(i)),
        _ => None,
    })
}

/// The dotted locations that held an ordered sequence in a compiled
/// template.
///
/// Built once while compiling and read on every validation. Each path is
/// stored at most once, in discovery order (root first, depth first). The
/// order only matters for reproducible output; the codec treats every path
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRegistry {
    paths: Vec<String>,
}

impl PathRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` as a sequence location. Returns `false` if it was
    /// already registered.
    pub fn register(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if self.contains(&path) {
            return false;
        }
        self.paths.push(path);
        true
    }

    /// Whether `path` is a registered sequence location.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }

    /// Returns the number of registered paths.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if no sequence locations were registered.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate over the registered paths in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Returns a slice of all registered paths.
    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }
}

impl<S: Into<String>> FromIterator<S> for PathRegistry {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut registry = Self::new();
        for path in iter {
            registry.register(path);
        }
        registry
    }
}

impl<'a> IntoIterator for &'a PathRegistry {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
