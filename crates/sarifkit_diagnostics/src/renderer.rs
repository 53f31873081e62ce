//! Human-readable rendering of diagnostics.

use crate::diagnostic::Diagnostic;
use crate::location::Location;
use sarifkit_sarif::Level;

/// Trait for rendering diagnostics into formatted output strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic into a formatted string.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[FXE0004]: No symbolic function for aten::unique.
///   --> torch/onnx/export.py:114:16 called from export
///    = stack:
///        at model.py:12 forward
///    = graph: fx_graph (before decomposition)
///    = tags: unsupported-op
///    = note: additional detail
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The terminal width. Graph previews are truncated to fit.
    pub width: u16,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, width: u16) -> Self {
        Self { color, width }
    }

    fn level_label(&self, level: Level) -> String {
        if !self.color {
            return level.to_string();
        }
        let code = match level {
            Level::Error => "1;31",
            Level::Warning => "1;33",
            Level::Note => "1;36",
            Level::None => "1",
        };
        format!("\x1b[{code}m{level}\x1b[0m")
    }

    fn truncate(&self, text: &str, indent: usize) -> String {
        let budget = (self.width as usize).saturating_sub(indent).max(8);
        if text.chars().count() <= budget {
            return text.to_string();
        }
        let mut out: String = text.chars().take(budget - 3).collect();
        out.push_str("...");
        out
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = String::new();
        let message = diag.message_text();
        let mut lines = message.lines();

        // Header line: level[ID]: first message line
        out.push_str(&format!(
            "{}[{}]: {}\n",
            self.level_label(diag.level),
            diag.rule().id,
            lines.next().unwrap_or_default()
        ));

        for loc in &diag.locations {
            out.push_str(&format!("  --> {}\n", describe_location(loc)));
        }

        for stack in &diag.stacks {
            out.push_str("   = stack:\n");
            for frame in &stack.frame_locations {
                out.push_str(&format!("       at {}\n", describe_location(frame)));
            }
        }

        for graph in &diag.graphs {
            let summary = match &graph.description {
                Some(description) => format!("{} ({description})", graph.name),
                None => graph.name.clone(),
            };
            out.push_str(&format!("   = graph: {summary}\n"));
            if let Some(first) = graph.graph_str.lines().next() {
                out.push_str(&format!("       {}\n", self.truncate(first, 7)));
            }
        }

        if !diag.tags.is_empty() {
            let tags: Vec<&str> = diag.tags.iter().map(|t| t.value()).collect();
            out.push_str(&format!("   = tags: {}\n", tags.join(", ")));
        }

        for note in lines {
            out.push_str(&format!("   = note: {note}\n"));
        }

        out
    }
}

/// Formats `uri:line:col message`, omitting absent parts.
fn describe_location(loc: &Location) -> String {
    let mut text = loc.uri.clone();
    if let Some(line) = loc.line {
        text.push_str(&format!(":{line}"));
        if let Some(col) = loc.start_column {
            text.push_str(&format!(":{col}"));
        }
    }
    if !loc.message.is_empty() {
        text.push(' ');
        text.push_str(&loc.message);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::location::Stack;
    use crate::rule::Rule;
    use crate::tag::Tag;
    use std::sync::Arc;

    fn rule() -> Arc<Rule> {
        Arc::new(Rule::new("FXE0004", "missing-op", "No symbolic function."))
    }

    #[test]
    fn render_error_with_location() {
        let mut diag = Diagnostic::error(rule(), "No symbolic function for aten::unique.");
        diag.with_location(
            Location::new("export.py", "called from export")
                .with_line(114)
                .with_columns(16, None),
        );

        let output = TerminalRenderer::new(false, 80).render(&diag);
        assert!(output.contains("error[FXE0004]: No symbolic function for aten::unique."));
        assert!(output.contains("--> export.py:114:16 called from export"));
    }

    #[test]
    fn render_stack_graph_tags_and_notes() {
        let mut stack = Stack::new();
        stack.add_frame("model.py", "forward", Some(12), None, None);
        stack.add_frame("layer.py", "", None, None, None);

        let mut diag = Diagnostic::warning(rule(), "unsupported");
        diag.with_stack(stack)
            .with_graph(Graph::new("graph():\n  %x = input", "fx_graph").with_description("before"))
            .with_tag(Tag::new("unsupported-op"))
            .with_additional_message("first note")
            .with_additional_message("second note");

        let output = TerminalRenderer::new(false, 80).render(&diag);
        assert!(output.starts_with("warning[FXE0004]: unsupported\n"));
        assert!(output.contains("   = stack:\n       at model.py:12 forward\n       at layer.py\n"));
        assert!(output.contains("= graph: fx_graph (before)"));
        assert!(output.contains("       graph():\n"));
        assert!(!output.contains("%x = input"));
        assert!(output.contains("= tags: unsupported-op"));
        assert!(output.contains("= note: first note\n   = note: second note\n"));
    }

    #[test]
    fn render_uses_default_template() {
        let diag = Diagnostic::new(rule(), Level::Note, None);
        let output = TerminalRenderer::new(false, 80).render(&diag);
        assert_eq!(output, "note[FXE0004]: No symbolic function.\n");
    }

    #[test]
    fn color_wraps_level() {
        let diag = Diagnostic::error(rule(), "boom");
        let output = TerminalRenderer::new(true, 80).render(&diag);
        assert!(output.starts_with("\x1b[1;31merror\x1b[0m[FXE0004]: boom"));
    }

    #[test]
    fn long_graph_lines_truncate() {
        let mut diag = Diagnostic::warning(rule(), "w");
        diag.with_graph(Graph::new("x".repeat(100), "g"));
        let output = TerminalRenderer::new(false, 40).render(&diag);
        let preview = output.lines().find(|l| l.trim_start().starts_with('x')).unwrap();
        assert_eq!(preview.trim_start().chars().count(), 33);
        assert!(preview.ends_with("..."));
    }
}
