//! Result levels defined by the SARIF schema.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The level of a result, as fixed by the SARIF specification.
///
/// Ordered from least to most severe by declaration order. The set is closed;
/// categorization outside this axis goes through tags instead.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// No level applies (the result is informational or a pass).
    None,
    /// A note providing additional context.
    Note,
    /// A potential problem. This is the schema default when `level` is absent.
    #[default]
    Warning,
    /// A definite problem.
    Error,
}

impl Level {
    /// Returns the schema string for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Note => "note",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }

    /// Returns `true` if this level is [`Error`](Level::Error).
    pub fn is_error(self) -> bool {
        self == Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for parsing level strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    /// The input string that failed to parse.
    pub input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid level: '{}'", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "none" => Ok(Level::None),
            "note" => Ok(Level::Note),
            "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            other => Err(ParseLevelError {
                input: other.to_string(),
            }),
        }
    }
}
