//! The top-level log, runs, and tool metadata.

use crate::descriptor::ReportingDescriptor;
use crate::result::SarifResult;
use serde::{Deserialize, Serialize};

/// The SARIF format version written by this crate.
pub const SARIF_VERSION: &str = "2.1.0";

/// The JSON schema URI for [`SARIF_VERSION`].
pub const SARIF_SCHEMA_URI: &str =
    "https://docs.oasis-open.org/sarif/sarif/v2.1.0/cs01/schemas/sarif-schema-2.1.0.json";

/// A SARIF log file: a versioned list of runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SarifLog {
    /// The schema URI.
    #[serde(rename = "$schema", default = "default_schema")]
    pub schema: String,
    /// The format version.
    pub version: String,
    /// The runs contained in the log.
    pub runs: Vec<Run>,
}

fn default_schema() -> String {
    SARIF_SCHEMA_URI.to_string()
}

impl SarifLog {
    /// Creates a log at the current format version containing `runs`.
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            schema: default_schema(),
            version: SARIF_VERSION.to_string(),
            runs,
        }
    }

    /// Parses a log from JSON text.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serializes the log as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// One invocation of one tool, with its results.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Run {
    /// The tool that produced the run.
    pub tool: Tool,
    /// The results, in reporting order. Always written, even when empty.
    #[serde(default)]
    pub results: Vec<SarifResult>,
}

/// The analysis tool.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tool {
    /// The tool's primary component.
    pub driver: ToolComponent,
}

/// A tool component and the rules it declares.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolComponent {
    /// The component name.
    pub name: String,
    /// The component version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// The rule catalog. Always written, even when empty.
    #[serde(default)]
    pub rules: Vec<ReportingDescriptor>,
}
