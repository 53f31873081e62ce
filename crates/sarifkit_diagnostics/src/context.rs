//! Run-scoped accumulator for diagnostics.

use crate::diagnostic::{Diagnostic, Reportable};
use crate::error::DiagnosticError;
use crate::rule::Rule;
use sarifkit_config::DiagnosticOptions;
use sarifkit_sarif::{Level, Run, SarifLog, Tool, ToolComponent};
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Collects the diagnostics of one processing run and exports them as SARIF.
///
/// A context lives for the duration of a run and is released when it goes
/// out of scope; dropping it performs no cleanup beyond a debug log line.
/// Diagnostics are appended in order and never removed.
///
/// The context only accepts its own diagnostic type `D`. Access is through
/// `&mut self`; callers sharing a context across threads wrap it in a `Mutex`.
///
/// ```
/// use std::sync::Arc;
/// use sarifkit_diagnostics::{DiagnosticContext, Level, Location, Rule};
///
/// let rule = Arc::new(Rule::new("R1", "demo-rule", "Something happened."));
/// let mut ctx: DiagnosticContext = DiagnosticContext::new("demo", "1.0");
/// ctx.diagnose(&rule, Level::Error, Some("oops"))
///     .with_location(Location::new("model.py", "here").with_line(3));
///
/// let run = ctx.to_sarif();
/// assert_eq!(run.results[0].message.text, "oops");
/// ```
#[derive(Debug)]
pub struct DiagnosticContext<D: Reportable = Diagnostic> {
    /// The tool name written into the run's driver.
    pub name: String,
    /// The tool version written into the run's driver.
    pub version: String,
    /// Options applied as diagnostics are added.
    pub options: Option<DiagnosticOptions>,
    diagnostics: Vec<D>,
}

impl<D: Reportable> DiagnosticContext<D> {
    /// Creates an empty context with default options.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            options: None,
            diagnostics: Vec::new(),
        }
    }

    /// Sets the options.
    pub fn with_options(mut self, options: DiagnosticOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Adds a diagnostic created outside the context.
    ///
    /// Fails with [`DiagnosticError::TypeMismatch`] unless `T` is exactly the
    /// context's diagnostic type.
    pub fn add_diagnostic<T: Reportable>(&mut self, diagnostic: T) -> Result<(), DiagnosticError> {
        let boxed: Box<dyn Any> = Box::new(diagnostic);
        match boxed.downcast::<D>() {
            Ok(diagnostic) => {
                self.push(*diagnostic);
                Ok(())
            }
            Err(_) => Err(DiagnosticError::TypeMismatch {
                expected: type_name::<D>(),
                found: type_name::<T>(),
            }),
        }
    }

    /// Creates a diagnostic for `rule`, records it, and returns it for
    /// further building.
    pub fn diagnose(&mut self, rule: &Arc<Rule>, level: Level, message: Option<&str>) -> &mut D {
        let diagnostic = D::from_parts(Arc::clone(rule), level, message.map(str::to_string));
        self.push(diagnostic);
        let last = self.diagnostics.len() - 1;
        &mut self.diagnostics[last]
    }

    fn push(&mut self, mut diagnostic: D) {
        let warnings_as_errors = self.options.is_some_and(|o| o.warnings_as_errors);
        let inner = diagnostic.diagnostic_mut();
        if warnings_as_errors && inner.level == Level::Warning {
            tracing::debug!(rule = %inner.rule().id, "promoting warning to error");
            inner.level = Level::Error;
        }
        tracing::debug!(
            context = %self.name,
            rule = %inner.rule().id,
            level = %inner.level,
            "diagnostic recorded"
        );
        self.diagnostics.push(diagnostic);
    }

    /// The diagnostics recorded so far, in insertion order.
    pub fn diagnostics(&self) -> &[D] {
        &self.diagnostics
    }

    /// The number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// The number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.diagnostic().level.is_error())
            .count()
    }

    /// Returns `true` if any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    /// Returns the SARIF run for everything recorded so far.
    ///
    /// The driver's rule list holds one descriptor per diagnostic, in the
    /// order diagnostics were added; it is not deduplicated.
    pub fn to_sarif(&self) -> Run {
        tracing::trace!(
            context = %self.name,
            diagnostics = self.diagnostics.len(),
            "exporting run"
        );
        Run {
            tool: Tool {
                driver: ToolComponent {
                    name: self.name.clone(),
                    version: Some(self.version.clone()),
                    rules: self
                        .diagnostics
                        .iter()
                        .map(|d| d.diagnostic().rule().to_sarif())
                        .collect(),
                },
            },
            results: self.diagnostics.iter().map(Reportable::to_sarif).collect(),
        }
    }

    /// Returns a SARIF log containing this context's run.
    pub fn to_sarif_log(&self) -> SarifLog {
        SarifLog::new(vec![self.to_sarif()])
    }

    /// Serializes the SARIF log as indented JSON.
    pub fn to_json(&self) -> Result<String, DiagnosticError> {
        Ok(self.to_sarif_log().to_json_pretty()?)
    }

    /// Writes the SARIF log to `path`.
    pub fn dump(&self, path: &Path) -> Result<(), DiagnosticError> {
        std::fs::write(path, self.to_json()?)?;
        tracing::debug!(context = %self.name, path = %path.display(), "SARIF log written");
        Ok(())
    }
}

impl DiagnosticContext<Diagnostic> {
    /// Rebuilds a context from a SARIF run.
    ///
    /// Each result's `ruleId` is resolved against the driver's rule list; when
    /// an id appears more than once, the first descriptor wins and all results
    /// under it share one rule. Diagnostics are re-added in result order, so
    /// `options` apply to them.
    pub fn from_sarif(run: &Run, options: Option<DiagnosticOptions>) -> Result<Self, DiagnosticError> {
        let driver = &run.tool.driver;
        let mut ctx = Self::new(driver.name.clone(), driver.version.clone().unwrap_or_default());
        ctx.options = options;

        let mut descriptors = HashMap::new();
        for descriptor in &driver.rules {
            descriptors.entry(descriptor.id.as_str()).or_insert(descriptor);
        }

        let mut rules: HashMap<&str, Arc<Rule>> = HashMap::new();
        for (index, result) in run.results.iter().enumerate() {
            let rule_id = result
                .rule_id
                .as_deref()
                .ok_or_else(|| DiagnosticError::MissingField {
                    owner: format!("result #{index}"),
                    field: "ruleId",
                })?;
            let rule = match rules.get(rule_id) {
                Some(rule) => Arc::clone(rule),
                None => {
                    let descriptor = descriptors
                        .get(rule_id)
                        .ok_or_else(|| DiagnosticError::UnknownRule(rule_id.to_string()))?;
                    let rule = Arc::new(Rule::from_sarif(descriptor)?);
                    rules.insert(rule_id, Arc::clone(&rule));
                    rule
                }
            };
            ctx.push(Diagnostic::from_sarif(result, rule));
        }

        Ok(ctx)
    }
}

impl<D: Reportable> Drop for DiagnosticContext<D> {
    fn drop(&mut self) {
        tracing::debug!(
            context = %self.name,
            diagnostics = self.diagnostics.len(),
            "diagnostic context closed"
        );
    }
}
