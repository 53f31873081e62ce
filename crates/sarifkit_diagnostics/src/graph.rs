//! Pre-rendered graphs attached to diagnostics for context.

use sarifkit_sarif as sarif;

/// A named, pre-rendered graph (for example a printed IR graph).
///
/// `graph_str` is opaque: its format is never parsed or validated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Graph {
    /// The rendered graph.
    pub graph_str: String,
    /// The graph's name.
    pub name: String,
    /// What the graph shows.
    pub description: Option<String>,
}

impl Graph {
    /// Creates a graph without a description.
    pub fn new(graph_str: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            graph_str: graph_str.into(),
            name: name.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the SARIF graph: the rendering becomes the description text,
    /// and name/description go into the property bag.
    pub fn to_sarif(&self) -> sarif::Graph {
        let mut properties = sarif::PropertyBag::default();
        properties.insert("name", self.name.as_str());
        if let Some(description) = &self.description {
            properties.insert("description", description.as_str());
        }
        sarif::Graph {
            description: Some(sarif::Message::new(&self.graph_str)),
            properties: Some(properties),
        }
    }

    /// Reads a SARIF graph written by [`to_sarif`](Self::to_sarif).
    pub fn from_sarif(graph: &sarif::Graph) -> Self {
        let properties = graph.properties.as_ref();
        Self {
            graph_str: graph
                .description
                .as_ref()
                .map(|m| m.text.clone())
                .unwrap_or_default(),
            name: properties
                .and_then(|p| p.get_str("name"))
                .unwrap_or_default()
                .to_string(),
            description: properties
                .and_then(|p| p.get_str("description"))
                .map(str::to_string),
        }
    }
}
