//! `sarifkit rules`: list a rule catalog.
//!
//! Reads a JSON array of SARIF reporting descriptors, builds a rule
//! collection from it (which rejects colliding field names), and prints one
//! line per rule.

use std::path::Path;

use sarifkit_diagnostics::{Rule, RuleCollection};
use sarifkit_sarif::ReportingDescriptor;

use crate::{GlobalArgs, RulesArgs};

/// Runs the `sarifkit rules` command. Returns exit code 0 on success.
pub fn run(args: &RulesArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let collection = load_catalog(&args.catalog, &args.name)?;
    tracing::info!(
        catalog = %args.catalog.display(),
        rules = collection.len(),
        "loaded rule catalog"
    );

    print!("{}", format_listing(&collection));

    if !global.quiet {
        eprintln!("   {} rule(s) in {}", collection.len(), collection.name());
    }
    Ok(0)
}

/// Reads and validates a rule catalog file.
pub fn load_catalog(path: &Path, name: &str) -> Result<RuleCollection, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("could not read {}: {e}", path.display()))?;
    let descriptors: Vec<ReportingDescriptor> = serde_json::from_str(&content)
        .map_err(|e| format!("invalid rule catalog {}: {e}", path.display()))?;
    let rules = descriptors
        .iter()
        .map(Rule::from_sarif)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RuleCollection::custom_collection_from_list(name, rules)?)
}

/// Formats one aligned line per rule: field, id, name, short description.
fn format_listing(collection: &RuleCollection) -> String {
    let field_width = collection.iter().map(|(f, _)| f.len()).max().unwrap_or(0);
    let id_width = collection.iter().map(|(_, r)| r.id.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (field, rule) in collection.iter() {
        let summary = rule.short_description.as_deref().unwrap_or("");
        let line = format!(
            "{field:<field_width$}  {id:<id_width$}  {name}  {summary}",
            id = rule.id,
            name = rule.name,
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
