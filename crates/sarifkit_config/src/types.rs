//! Configuration types deserialized from `sarifkit.toml`.

use serde::Deserialize;

/// The top-level configuration parsed from `sarifkit.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Tool metadata written into each run's driver. Optional; callers
    /// usually supply their own name and version.
    #[serde(default)]
    pub tool: Option<ToolMeta>,
    /// Options applied to every diagnostic context.
    #[serde(default)]
    pub diagnostics: DiagnosticOptions,
}

/// The name and version of the tool producing diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ToolMeta {
    /// The tool name.
    pub name: String,
    /// The tool version string.
    #[serde(default)]
    pub version: String,
}

/// Options for a diagnostic context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DiagnosticOptions {
    /// Promote every `warning` diagnostic to `error` when it is recorded.
    #[serde(default)]
    pub warnings_as_errors: bool,
    /// How much the tool logs while diagnostics are collected.
    #[serde(default)]
    pub verbosity: Verbosity,
}

impl DiagnosticOptions {
    /// Returns options with `warnings_as_errors` set.
    pub fn warnings_as_errors() -> Self {
        Self {
            warnings_as_errors: true,
            ..Self::default()
        }
    }
}

/// Logging verbosity, from least to most output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Informational messages.
    #[default]
    Info,
    /// Per-diagnostic debug output.
    Debug,
    /// Everything, including export tracing.
    Trace,
}
