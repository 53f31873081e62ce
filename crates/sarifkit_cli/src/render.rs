//! `sarifkit render`: print the diagnostics in a SARIF log.
//!
//! Each run in the log is rebuilt into a diagnostic context (applying the
//! configured options), then rendered to the terminal or re-emitted as
//! normalized SARIF JSON.

use std::path::Path;

use sarifkit_diagnostics::{
    Diagnostic, DiagnosticContext, DiagnosticOptions, DiagnosticRenderer, Level,
    TerminalRenderer,
};
use sarifkit_sarif::SarifLog;

use crate::{GlobalArgs, RenderArgs, ReportFormat};

/// Runs the `sarifkit render` command.
///
/// Returns exit code 0 if no error-level diagnostics exist, 1 otherwise.
pub fn run(args: &RenderArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut options = global.config.diagnostics;
    if args.warnings_as_errors {
        options.warnings_as_errors = true;
    }

    let contexts = load_contexts(&args.log, options)?;
    tracing::info!(
        log = %args.log.display(),
        runs = contexts.len(),
        "loaded SARIF log"
    );

    match args.format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color, 80);
            for ctx in &contexts {
                if !global.quiet {
                    eprintln!("   Run {} {}", ctx.name, ctx.version);
                }
                for diag in ctx.diagnostics() {
                    println!("{}", renderer.render(diag));
                }
            }
        }
        ReportFormat::Json => {
            let log = SarifLog::new(contexts.iter().map(|ctx| ctx.to_sarif()).collect());
            println!("{}", log.to_json_pretty()?);
        }
    }

    let (errors, warnings) = summarize(&contexts);
    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!("   Result: {errors} error(s), {warnings} warning(s)");
    }

    Ok(if errors > 0 { 1 } else { 0 })
}

/// Reads a SARIF log and rebuilds one context per run.
pub fn load_contexts(
    path: &Path,
    options: DiagnosticOptions,
) -> Result<Vec<DiagnosticContext<Diagnostic>>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {e}", path.display()))?;
    let log = SarifLog::from_json(&content)
        .map_err(|e| format!("invalid SARIF log {}: {e}", path.display()))?;

    let mut contexts = Vec::with_capacity(log.runs.len());
    for run in &log.runs {
        contexts.push(DiagnosticContext::from_sarif(run, Some(options))?);
    }
    Ok(contexts)
}

/// Counts error- and warning-level diagnostics across all contexts.
fn summarize(contexts: &[DiagnosticContext<Diagnostic>]) -> (usize, usize) {
    let errors = contexts.iter().map(|ctx| ctx.error_count()).sum();
    let warnings = contexts
        .iter()
        .flat_map(|ctx| ctx.diagnostics())
        .filter(|d| d.level == Level::Warning)
        .count();
    (errors, warnings)
}
