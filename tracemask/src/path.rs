//! Dotted path compilation.
//!
//! A path such as `entries[].data.*.password` is split on `.` into typed
//! segments. Array suffixes are documentary: the walker steps through arrays
//! wherever it meets them, so `key[]` compiles to the literal `key` and a bare
//! `[]` compiles to nothing.

use std::fmt;

/// Token that matches any key of an object.
pub const WILDCARD: &str = "*";

/// Suffix marking a key whose value is expected to be an array.
pub const ARRAY_SUFFIX: &str = "[]";

/// One step of a compiled path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches exactly one object key.
    Literal(String),
    /// Matches every key of an object.
    Wildcard,
}

impl Segment {
    /// Returns the key this segment matches, if it can match anything by name.
    ///
    /// Empty literals (produced by `..` or a leading/trailing `.`) never
    /// match, not even a record key that is itself `""`.
    pub fn key(&self) -> Option<&str> {
        match self {
            Segment::Literal(key) if !key.is_empty() => Some(key.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(key) => f.write_str(key),
            Segment::Wildcard => f.write_str(WILDCARD),
        }
    }
}

/// A path split into segments, ready for the tree walker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledPath {
    source: String,
    segments: Vec<Segment>,
}

impl CompiledPath {
    /// Compiles a dotted path. Compilation never fails; malformed tokens
    /// degrade to segments that match nothing.
    pub fn compile(path: &str) -> Self {
        let segments = path
            .split('.')
            .filter_map(|token| {
                if token == WILDCARD {
                    Some(Segment::Wildcard)
                } else if token.contains(ARRAY_SUFFIX) {
                    let base = token.replace(ARRAY_SUFFIX, "");
                    (!base.is_empty()).then_some(Segment::Literal(base))
                } else {
                    Some(Segment::Literal(token.to_string()))
                }
            })
            .collect();

        Self {
            source: path.to_string(),
            segments,
        }
    }

    /// The path text this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&str> for CompiledPath {
    fn from(path: &str) -> Self {
        Self::compile(path)
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(key: &str) -> Segment {
        Segment::Literal(key.to_string())
    }

    #[test]
    fn compiles_literal_segments() {
        let path = CompiledPath::compile("attributes.user.password");
        assert_eq!(
            path.segments(),
            &[literal("attributes"), literal("user"), literal("password")]
        );
    }

    #[test]
    fn compiles_wildcards() {
        let path = CompiledPath::compile("attributes.*.password");
        assert_eq!(
            path.segments(),
            &[literal("attributes"), Segment::Wildcard, literal("password")]
        );
    }

    #[test]
    fn strips_array_suffix() {
        let path = CompiledPath::compile("entries[].data.password");
        assert_eq!(
            path.segments(),
            &[literal("entries"), literal("data"), literal("password")]
        );
    }

    #[test]
    fn bare_array_marker_contributes_nothing() {
        let path = CompiledPath::compile("items.[].token");
        assert_eq!(path.segments(), &[literal("items"), literal("token")]);

        assert!(CompiledPath::compile("[]").is_empty());
    }

    #[test]
    fn repeated_array_suffix_is_stripped() {
        let path = CompiledPath::compile("matrix[][].cell");
        assert_eq!(path.segments(), &[literal("matrix"), literal("cell")]);
    }

    #[test]
    fn empty_tokens_become_unmatchable_literals() {
        let path = CompiledPath::compile("a..b");
        assert_eq!(path.segments(), &[literal("a"), literal(""), literal("b")]);
        assert_eq!(path.segments()[1].key(), None);
        assert_eq!(path.segments()[0].key(), Some("a"));
    }

    #[test]
    fn keeps_source_text() {
        let path = CompiledPath::from("entries[].token");
        assert_eq!(path.source(), "entries[].token");
        assert_eq!(path.to_string(), "entries[].token");
        assert_eq!(path.len(), 2);
    }
}
