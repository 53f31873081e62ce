//! Diagnostics: one reported issue under a rule, with its supporting context.

use crate::graph::Graph;
use crate::location::{Location, Stack};
use crate::rule::Rule;
use crate::tag::Tag;
use sarifkit_sarif::{Level, Message, PropertyBag, SarifResult};
use std::sync::Arc;

/// A concrete diagnostic type a [`DiagnosticContext`](crate::DiagnosticContext) can hold.
///
/// [`Diagnostic`] implements it directly. Pipelines that need extra fields
/// wrap a `Diagnostic` and implement this trait, overriding
/// [`to_sarif`](Self::to_sarif) when the extra fields should be exported.
pub trait Reportable: Sized + 'static {
    /// Constructs a diagnostic for `rule` at `level`.
    fn from_parts(rule: Arc<Rule>, level: Level, message: Option<String>) -> Self;

    /// The underlying diagnostic.
    fn diagnostic(&self) -> &Diagnostic;

    /// The underlying diagnostic, mutably.
    fn diagnostic_mut(&mut self) -> &mut Diagnostic;

    /// Returns the SARIF result for this diagnostic.
    fn to_sarif(&self) -> SarifResult {
        self.diagnostic().to_sarif()
    }
}

/// One reported issue.
///
/// The rule is fixed at construction. Everything else can be extended in
/// place through the `with_*` methods, which return `&mut Self` so calls
/// chain off [`DiagnosticContext::diagnose`](crate::DiagnosticContext::diagnose).
/// Nothing is ever removed, and export always reflects the current state.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    rule: Arc<Rule>,
    /// The severity level.
    pub level: Level,
    /// Overrides the rule's default message when set and non-empty.
    pub message: Option<String>,
    /// Positions relevant to the issue.
    pub locations: Vec<Location>,
    /// Call stacks leading to the issue.
    pub stacks: Vec<Stack>,
    /// Graphs giving context.
    pub graphs: Vec<Graph>,
    /// Extra text printed after the primary message, one entry per line.
    pub additional_message: Option<String>,
    /// Categorization tags.
    pub tags: Vec<Tag>,
}

impl Diagnostic {
    /// Creates a diagnostic with no context attached.
    pub fn new(rule: Arc<Rule>, level: Level, message: Option<String>) -> Self {
        Self {
            rule,
            level,
            message,
            locations: Vec::new(),
            stacks: Vec::new(),
            graphs: Vec::new(),
            additional_message: None,
            tags: Vec::new(),
        }
    }

    /// Creates an error diagnostic with an explicit message.
    pub fn error(rule: Arc<Rule>, message: impl Into<String>) -> Self {
        Self::new(rule, Level::Error, Some(message.into()))
    }

    /// Creates a warning diagnostic with an explicit message.
    pub fn warning(rule: Arc<Rule>, message: impl Into<String>) -> Self {
        Self::new(rule, Level::Warning, Some(message.into()))
    }

    /// The rule this diagnostic was reported under.
    pub fn rule(&self) -> &Arc<Rule> {
        &self.rule
    }

    /// Adds a location.
    pub fn with_location(&mut self, location: Location) -> &mut Self {
        self.locations.push(location);
        self
    }

    /// Adds a call stack.
    pub fn with_stack(&mut self, stack: Stack) -> &mut Self {
        self.stacks.push(stack);
        self
    }

    /// Adds a graph.
    pub fn with_graph(&mut self, graph: Graph) -> &mut Self {
        self.graphs.push(graph);
        self
    }

    /// Adds a tag.
    pub fn with_tag(&mut self, tag: Tag) -> &mut Self {
        self.tags.push(tag);
        self
    }

    /// Appends a line to the additional message.
    pub fn with_additional_message(&mut self, message: impl Into<String>) -> &mut Self {
        let message = message.into();
        self.additional_message = Some(match self.additional_message.take() {
            Some(existing) => format!("{existing}\n{message}"),
            None => message,
        });
        self
    }

    /// Returns the exported message text: the explicit message, or the rule's
    /// default template when none (or an empty one) was given, followed by
    /// the additional message on a new line.
    pub fn message_text(&self) -> String {
        let primary = match self.message.as_deref() {
            Some(message) if !message.is_empty() => message,
            _ => self.rule.message_default_template.as_str(),
        };
        match &self.additional_message {
            Some(additional) => format!("{primary}\n{additional}"),
            None => primary.to_string(),
        }
    }

    /// Returns the SARIF result for this diagnostic.
    pub fn to_sarif(&self) -> SarifResult {
        SarifResult {
            rule_id: Some(self.rule.id.clone()),
            level: Some(self.level),
            message: Message::new(self.message_text()),
            locations: self.locations.iter().map(Location::to_sarif).collect(),
            stacks: self.stacks.iter().map(Stack::to_sarif).collect(),
            graphs: self.graphs.iter().map(Graph::to_sarif).collect(),
            properties: Some(PropertyBag::with_tags(
                self.tags.iter().map(|t| t.value().to_string()).collect(),
            )),
        }
    }

    /// Rebuilds a diagnostic from a SARIF result reported under `rule`.
    ///
    /// The full message text becomes the explicit message. A missing level
    /// reads as `warning`, the schema default.
    pub fn from_sarif(result: &SarifResult, rule: Arc<Rule>) -> Self {
        Self {
            rule,
            level: result.level.unwrap_or_default(),
            message: Some(result.message.text.clone()),
            locations: result.locations.iter().map(Location::from_sarif).collect(),
            stacks: result.stacks.iter().map(Stack::from_sarif).collect(),
            graphs: result.graphs.iter().map(Graph::from_sarif).collect(),
            additional_message: None,
            tags: result.tags().iter().cloned().map(Tag::new).collect(),
        }
    }
}

impl Reportable for Diagnostic {
    fn from_parts(rule: Arc<Rule>, level: Level, message: Option<String>) -> Self {
        Self::new(rule, level, message)
    }

    fn diagnostic(&self) -> &Diagnostic {
        self
    }

    fn diagnostic_mut(&mut self) -> &mut Diagnostic {
        self
    }
}
