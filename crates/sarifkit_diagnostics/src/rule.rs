//! Rules: the named, described categories diagnostics are reported under.

use crate::error::{DiagnosticError, TemplateError};
use crate::template::{format_template, TemplateArgs};
use sarifkit_sarif::{MultiformatMessageString, ReportingDescriptor};
use std::collections::BTreeMap;

/// A diagnostic category with a default message template.
///
/// Rules are built once when a checker initializes and shared read-only
/// (usually as `Arc<Rule>`) by every diagnostic reported under them.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Rule {
    /// Stable rule identifier, e.g. `FXE0004`.
    pub id: String,
    /// Human-readable kebab-case name, e.g. `missing-custom-symbolic-function`.
    pub name: String,
    /// Default message, possibly with `{}` fields. See [`format_message`](Self::format_message).
    pub message_default_template: String,
    /// A one-line description.
    pub short_description: Option<String>,
    /// A longer plain-text description.
    pub full_description: Option<String>,
    /// The Markdown form of the longer description.
    pub full_description_markdown: Option<String>,
    /// Link to documentation.
    pub help_uri: Option<String>,
}

impl Rule {
    /// Creates a rule with no descriptions or help link.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        message_default_template: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            message_default_template: message_default_template.into(),
            short_description: None,
            full_description: None,
            full_description_markdown: None,
            help_uri: None,
        }
    }

    /// Sets the short description.
    pub fn with_short_description(mut self, text: impl Into<String>) -> Self {
        self.short_description = Some(text.into());
        self
    }

    /// Sets the full description, with an optional Markdown form.
    pub fn with_full_description(
        mut self,
        text: impl Into<String>,
        markdown: Option<String>,
    ) -> Self {
        self.full_description = Some(text.into());
        self.full_description_markdown = markdown;
        self
    }

    /// Sets the help URI.
    pub fn with_help_uri(mut self, uri: impl Into<String>) -> Self {
        self.help_uri = Some(uri.into());
        self
    }

    /// Builds a rule from a SARIF reporting descriptor.
    ///
    /// Missing descriptions and help links become `None`. The descriptor's
    /// `name` and `messageStrings.default` are required.
    pub fn from_sarif(descriptor: &ReportingDescriptor) -> Result<Self, DiagnosticError> {
        let missing = |field: &'static str| DiagnosticError::MissingField {
            owner: format!("reporting descriptor '{}'", descriptor.id),
            field,
        };
        let name = descriptor.name.clone().ok_or_else(|| missing("name"))?;
        let template = descriptor
            .default_message()
            .map(|m| m.text.clone())
            .ok_or_else(|| missing("messageStrings.default"))?;
        let full = descriptor.full_description.as_ref();

        Ok(Self {
            id: descriptor.id.clone(),
            name,
            message_default_template: template,
            short_description: descriptor.short_description.as_ref().map(|d| d.text.clone()),
            full_description: full.map(|d| d.text.clone()),
            full_description_markdown: full.and_then(|d| d.markdown.clone()),
            help_uri: descriptor.help_uri.clone(),
        })
    }

    /// Returns the SARIF reporting descriptor for this rule.
    ///
    /// The Markdown description is only written alongside a plain-text one.
    pub fn to_sarif(&self) -> ReportingDescriptor {
        let full_description =
            self.full_description
                .as_ref()
                .map(|text| MultiformatMessageString {
                    text: text.clone(),
                    markdown: self.full_description_markdown.clone(),
                });

        ReportingDescriptor {
            id: self.id.clone(),
            name: Some(self.name.clone()),
            short_description: self
                .short_description
                .as_ref()
                .map(MultiformatMessageString::text),
            full_description,
            message_strings: Some(BTreeMap::from([(
                "default".to_string(),
                MultiformatMessageString::text(&self.message_default_template),
            )])),
            help_uri: self.help_uri.clone(),
        }
    }

    /// Formats the default message template with `args`.
    pub fn format_message(&self, args: &TemplateArgs) -> Result<String, TemplateError> {
        format_template(&self.message_default_template, args)
    }
}
