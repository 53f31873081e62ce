//! Results and the graphs attached to them.

use crate::level::Level;
use crate::location::{Location, Stack};
use crate::message::{Message, PropertyBag};
use serde::{Deserialize, Serialize};

/// A single result reported by a tool (a `result` in the schema).
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    /// The identifier of the rule that was evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<String>,
    /// The result level. Consumers treat an absent level as `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    /// The result message.
    pub message: Message,
    /// Locations where the result was detected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<Location>,
    /// Call stacks relevant to the result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stacks: Vec<Stack>,
    /// Graphs relevant to the result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graphs: Vec<Graph>,
    /// Additional properties, including tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}

impl SarifResult {
    /// Returns the tags recorded in the property bag, or an empty slice.
    pub fn tags(&self) -> &[String] {
        self.properties
            .as_ref()
            .and_then(|p| p.tags.as_deref())
            .unwrap_or(&[])
    }
}

/// A graph attached to a result.
///
/// Nodes and edges are not modeled; the rendered graph travels as the
/// description text and its name/description sit in the property bag.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    /// A description of the graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Message>,
    /// Additional properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<PropertyBag>,
}
