//! Open-ended tags for categorizing diagnostics outside the level axis.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A tag attached to a diagnostic.
///
/// Unlike [`Level`](crate::Level), the set of tags is open: each pipeline
/// declares its own, usually as constants.
///
/// ```
/// use sarifkit_diagnostics::Tag;
///
/// const UNSUPPORTED_OP: Tag = Tag::from_static("unsupported-op");
/// assert_eq!(UNSUPPORTED_OP.value(), "unsupported-op");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    /// Creates a tag from a string literal. Usable in `const` items.
    pub const fn from_static(value: &'static str) -> Self {
        Tag(Cow::Borrowed(value))
    }

    /// Creates a tag from a runtime string.
    pub fn new(value: impl Into<String>) -> Self {
        Tag(Cow::Owned(value.into()))
    }

    /// Returns the tag's string value.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERF: Tag = Tag::from_static("perf");

    #[test]
    fn static_and_owned_compare_equal() {
        assert_eq!(PERF, Tag::new("perf"));
        assert_ne!(PERF, Tag::new("correctness"));
    }

    #[test]
    fn display_is_value() {
        assert_eq!(format!("{PERF}"), "perf");
    }

    #[test]
    fn serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&PERF).unwrap(), "\"perf\"");
        let back: Tag = serde_json::from_str("\"perf\"").unwrap();
        assert_eq!(back.value(), "perf");
    }
}
