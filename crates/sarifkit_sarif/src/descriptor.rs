//! Reporting descriptors: the rule metadata entries of a tool component.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A message string available in plain text and, optionally, Markdown.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MultiformatMessageString {
    /// The plain-text form.
    pub text: String,
    /// The Markdown form, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl MultiformatMessageString {
    /// Creates a plain-text message string with no Markdown form.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: None,
        }
    }
}

/// Metadata describing one rule (a `reportingDescriptor` in the schema).
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportingDescriptor {
    /// The stable, opaque rule identifier.
    pub id: String,
    /// A human-readable identifier, typically kebab-case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// A concise description of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<MultiformatMessageString>,
    /// A comprehensive description of the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_description: Option<MultiformatMessageString>,
    /// Named message templates. The `default` entry is the rule's default message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_strings: Option<BTreeMap<String, MultiformatMessageString>>,
    /// A URI pointing to documentation for the rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
}

impl ReportingDescriptor {
    /// Returns the `default` message string, if one is declared.
    pub fn default_message(&self) -> Option<&MultiformatMessageString> {
        self.message_strings.as_ref()?.get("default")
    }
}
