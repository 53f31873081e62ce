//! Source positions and call stacks attached to diagnostics.

use sarifkit_sarif as sarif;

/// A position in an artifact with an explanatory message.
///
/// The URI is opaque; nothing checks that it resolves.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Location {
    /// The artifact URI (usually a file path).
    pub uri: String,
    /// What happens at this position.
    pub message: String,
    /// 1-based line number.
    pub line: Option<u32>,
    /// 1-based first column.
    pub start_column: Option<u32>,
    /// Column just past the end.
    pub end_column: Option<u32>,
}

impl Location {
    /// Creates a location with no line or column information.
    pub fn new(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            message: message.into(),
            line: None,
            start_column: None,
            end_column: None,
        }
    }

    /// Sets the line number.
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the column span.
    pub fn with_columns(mut self, start_column: u32, end_column: Option<u32>) -> Self {
        self.start_column = Some(start_column);
        self.end_column = end_column;
        self
    }

    /// Returns the SARIF location. The region spans a single line.
    pub fn to_sarif(&self) -> sarif::Location {
        sarif::Location {
            physical_location: Some(sarif::PhysicalLocation {
                artifact_location: Some(sarif::ArtifactLocation {
                    uri: Some(self.uri.clone()),
                }),
                region: Some(sarif::Region {
                    start_line: self.line,
                    start_column: self.start_column,
                    end_line: self.line,
                    end_column: self.end_column,
                }),
            }),
            message: Some(sarif::Message::new(&self.message)),
        }
    }

    /// Reads a SARIF location. Absent URI or message become empty strings.
    pub fn from_sarif(location: &sarif::Location) -> Self {
        let physical = location.physical_location.as_ref();
        let uri = physical
            .and_then(|p| p.artifact_location.as_ref())
            .and_then(|a| a.uri.clone())
            .unwrap_or_default();
        let region = physical.and_then(|p| p.region).unwrap_or_default();

        Self {
            uri,
            message: location
                .message
                .as_ref()
                .map(|m| m.text.clone())
                .unwrap_or_default(),
            line: region.start_line,
            start_column: region.start_column,
            end_column: region.end_column,
        }
    }
}

/// A call stack recorded as an ordered list of frame locations.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Stack {
    /// Frames in the order they were added.
    pub frame_locations: Vec<Location>,
}

impl Stack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame built from the given position.
    pub fn add_frame(
        &mut self,
        uri: impl Into<String>,
        message: impl Into<String>,
        line: Option<u32>,
        start_column: Option<u32>,
        end_column: Option<u32>,
    ) {
        self.frame_locations.push(Location {
            uri: uri.into(),
            message: message.into(),
            line,
            start_column,
            end_column,
        });
    }

    /// Returns the SARIF stack, one frame per location in order.
    pub fn to_sarif(&self) -> sarif::Stack {
        sarif::Stack {
            frames: self
                .frame_locations
                .iter()
                .map(|loc| sarif::StackFrame {
                    location: Some(loc.to_sarif()),
                })
                .collect(),
            message: None,
        }
    }

    /// Reads a SARIF stack. Frames without a location are skipped.
    pub fn from_sarif(stack: &sarif::Stack) -> Self {
        Self {
            frame_locations: stack
                .frames
                .iter()
                .filter_map(|frame| frame.location.as_ref())
                .map(Location::from_sarif)
                .collect(),
        }
    }
}
