//! End-to-end checks of the SARIF run produced by a diagnostic context.

use std::sync::Arc;

use sarifkit_diagnostics::{
    Diagnostic, DiagnosticContext, DiagnosticOptions, DiagnosticRenderer, Graph, Level, Location,
    Rule, RuleCollection, Stack, Tag, TemplateArgs, TerminalRenderer,
};
use sarifkit_sarif::{ReportingDescriptor, SarifLog};
use serde_json::json;

const UNSUPPORTED_OP: Tag = Tag::from_static("unsupported-op");

fn catalog() -> RuleCollection {
    let descriptors: Vec<ReportingDescriptor> = serde_json::from_value(json!([
        {
            "id": "FXE0004",
            "name": "missing-custom-symbolic-function",
            "shortDescription": { "text": "Missing symbolic function." },
            "messageStrings": { "default": { "text": "No symbolic function for {op}." } }
        },
        {
            "id": "FXE0007",
            "name": "op-level-debugging",
            "messageStrings": { "default": { "text": "Op level debug failed for {0}." } },
            "helpUri": "https://example.com/FXE0007"
        }
    ]))
    .unwrap();
    let rules = descriptors
        .iter()
        .map(Rule::from_sarif)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    RuleCollection::custom_collection_from_list("ExportRules", rules).unwrap()
}

#[test]
fn empty_run_shape() {
    let ctx: DiagnosticContext = DiagnosticContext::new("demo", "1.0");
    assert_eq!(
        serde_json::to_value(ctx.to_sarif()).unwrap(),
        json!({
            "tool": { "driver": { "name": "demo", "version": "1.0", "rules": [] } },
            "results": []
        })
    );
}

#[test]
fn single_error_run_shape() {
    let r1 = Arc::new(Rule::new("R1", "demo-rule", "default"));
    let mut ctx: DiagnosticContext = DiagnosticContext::new("demo", "1.0");
    ctx.diagnose(&r1, Level::Error, Some("oops"));

    let value = serde_json::to_value(ctx.to_sarif()).unwrap();
    assert_eq!(value["results"].as_array().unwrap().len(), 1);
    let result = &value["results"][0];
    assert_eq!(result["message"], json!({ "text": "oops" }));
    assert_eq!(result["level"], "error");
    assert_eq!(result["ruleId"], "R1");
    assert_eq!(
        value["tool"]["driver"]["rules"],
        json!([serde_json::to_value(r1.to_sarif()).unwrap()])
    );
}

#[test]
fn catalog_driven_run() {
    let rules = catalog();
    let missing = rules.get("missing_custom_symbolic_function").unwrap();
    let debugging = rules.get("op_level_debugging").unwrap();

    let mut ctx: DiagnosticContext = DiagnosticContext::new("torch.onnx", "2.1.0");

    let message = missing
        .format_message(&TemplateArgs::new().named("op", "aten::unique"))
        .unwrap();
    let mut stack = Stack::new();
    stack.add_frame("model.py", "forward", Some(12), Some(8), None);
    stack.add_frame("export.py", "export", Some(40), None, None);
    ctx.diagnose(missing, Level::Error, Some(message.as_str()))
        .with_location(Location::new("model.py", "unique called here").with_line(12))
        .with_stack(stack)
        .with_tag(UNSUPPORTED_OP);

    ctx.diagnose(debugging, Level::Warning, None)
        .with_graph(Graph::new("graph(%x): return %x", "fx_graph"))
        .with_additional_message("retrying with decomposition");

    assert!(rules.contains(ctx.diagnostics()[0].rule()));
    assert_eq!(ctx.error_count(), 1);

    let log = ctx.to_sarif_log();
    let text = log.to_json_pretty().unwrap();
    let parsed = SarifLog::from_json(&text).unwrap();
    assert_eq!(parsed, log);

    let run = &parsed.runs[0];
    assert_eq!(run.results[0].message.text, "No symbolic function for aten::unique.");
    assert_eq!(run.results[0].stacks[0].frames.len(), 2);
    assert_eq!(run.results[0].tags(), ["unsupported-op".to_string()]);
    assert_eq!(
        run.results[1].message.text,
        "Op level debug failed for {0}.\nretrying with decomposition"
    );

    let rebuilt = DiagnosticContext::from_sarif(run, None).unwrap();
    assert_eq!(&rebuilt.to_sarif(), run);

    let renderer = TerminalRenderer::new(false, 100);
    let rendered: Vec<String> = rebuilt.diagnostics().iter().map(|d| renderer.render(d)).collect();
    assert!(rendered[0].starts_with("error[FXE0004]:"));
    assert!(rendered[1].contains("= note: retrying with decomposition"));
}

#[test]
fn options_from_config_promote_warnings() {
    let config = sarifkit_config::load_config_from_str(
        "[diagnostics]\nwarnings_as_errors = true\n",
    )
    .unwrap();
    let rule = Arc::new(Rule::new("R1", "r", "m"));
    let mut ctx: DiagnosticContext =
        DiagnosticContext::new("demo", "1.0").with_options(config.diagnostics);
    ctx.add_diagnostic(Diagnostic::warning(rule, "w")).unwrap();
    assert!(ctx.has_errors());
    assert_eq!(ctx.options, Some(DiagnosticOptions::warnings_as_errors()));
}
