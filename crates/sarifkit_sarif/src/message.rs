//! Plain-text messages and property bags.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A SARIF message object. Only the plain `text` form is modeled.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Message {
    /// The message text.
    pub text: String,
}

impl Message {
    /// Creates a message with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Key/value pairs that provide additional information about an object.
///
/// The schema defines a property bag as an object with an unordered set of
/// arbitrarily named properties; `tags` is the only well-known key. Any other
/// key lands in [`extra`](Self::extra) and is flattened back on output.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PropertyBag {
    /// Tag strings attached to the owning object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Arbitrary additional properties.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl PropertyBag {
    /// Creates a property bag holding only the given tags.
    pub fn with_tags(tags: Vec<String>) -> Self {
        Self {
            tags: Some(tags),
            extra: BTreeMap::new(),
        }
    }

    /// Records an additional property, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.extra.insert(key.into(), value.into());
    }

    /// Returns an additional property as a string, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extra_properties_flatten() {
        let mut bag = PropertyBag::default();
        bag.insert("name", "main_graph");
        let value = serde_json::to_value(&bag).unwrap();
        assert_eq!(value, json!({ "name": "main_graph" }));
    }

    #[test]
    fn tags_and_extra_read_back() {
        let bag: PropertyBag =
            serde_json::from_value(json!({ "tags": ["a", "b"], "owner": "export" })).unwrap();
        assert_eq!(bag.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(bag.get_str("owner"), Some("export"));
        assert_eq!(bag.get_str("missing"), None);
    }

    #[test]
    fn empty_tags_still_serialized() {
        let bag = PropertyBag::with_tags(Vec::new());
        assert_eq!(serde_json::to_value(&bag).unwrap(), json!({ "tags": [] }));
    }
}
