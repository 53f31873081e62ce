//! Named groups of rules declared by a checker.

use crate::error::DiagnosticError;
use crate::rule::Rule;
use crate::template::{is_identifier, kebab_case_to_snake_case};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// A fixed, named set of rules, addressable by field name.
///
/// The `(id, name)` pairs of all member rules are frozen at construction,
/// indexed by id so lookups borrow the queried rule's strings.
/// Membership compares those pairs, not identity: a separately built rule
/// with the same id and name counts as a member even if its other fields
/// differ.
#[derive(Clone, Debug)]
pub struct RuleCollection {
    name: String,
    fields: Vec<(String, Arc<Rule>)>,
    rule_names_by_id: HashMap<String, HashSet<String>>,
}

impl RuleCollection {
    /// Builds a collection whose field names derive from each rule's
    /// kebab-case name (`missing-op` becomes `missing_op`).
    ///
    /// Fails if a derived field name is not an identifier or if two rules
    /// derive the same field name.
    pub fn custom_collection_from_list<I, R>(name: &str, rules: I) -> Result<Self, DiagnosticError>
    where
        I: IntoIterator<Item = R>,
        R: Into<Arc<Rule>>,
    {
        let fields = rules.into_iter().map(|rule| {
            let rule: Arc<Rule> = rule.into();
            (kebab_case_to_snake_case(&rule.name), rule)
        });
        Self::from_fields(name, fields)
    }

    /// Builds a collection from explicitly named fields.
    pub fn from_fields<I, R>(name: &str, fields: I) -> Result<Self, DiagnosticError>
    where
        I: IntoIterator<Item = (String, R)>,
        R: Into<Arc<Rule>>,
    {
        let mut seen = HashSet::new();
        let mut collected = Vec::new();
        for (field, rule) in fields {
            let rule: Arc<Rule> = rule.into();
            if !is_identifier(&field) {
                return Err(DiagnosticError::InvalidField {
                    collection: name.to_string(),
                    rule: rule.name.clone(),
                    field,
                });
            }
            if !seen.insert(field.clone()) {
                return Err(DiagnosticError::DuplicateField {
                    collection: name.to_string(),
                    field,
                });
            }
            collected.push((field, rule));
        }

        let mut rule_names_by_id: HashMap<String, HashSet<String>> = HashMap::new();
        for (_, rule) in &collected {
            rule_names_by_id
                .entry(rule.id.clone())
                .or_default()
                .insert(rule.name.clone());
        }

        Ok(Self {
            name: name.to_string(),
            fields: collected,
            rule_names_by_id,
        })
    }

    /// The collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if a member rule has the same id and name as `rule`.
    pub fn contains(&self, rule: &Rule) -> bool {
        self.rule_names_by_id
            .get(rule.id.as_str())
            .is_some_and(|names| names.contains(rule.name.as_str()))
    }

    /// Looks up a rule by field name.
    pub fn get(&self, field: &str) -> Option<&Arc<Rule>> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rule)| rule)
    }

    /// Iterates over `(field, rule)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Rule>)> {
        self.fields.iter().map(|(field, rule)| (field.as_str(), rule))
    }

    /// The number of rules.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the collection has no rules.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r1() -> Rule {
        Rule::new("R1", "missing-op", "Missing operator {0}.")
    }

    fn r2() -> Rule {
        Rule::new("R2", "unsupported-dtype", "Unsupported dtype {0}.")
    }

    #[test]
    fn members_are_contained() {
        let collection = RuleCollection::custom_collection_from_list("Foo", [r1(), r2()]).unwrap();
        assert_eq!(collection.name(), "Foo");
        assert_eq!(collection.len(), 2);
        assert!(collection.contains(&r1()));
        assert!(collection.contains(&r2()));
    }

    #[test]
    fn membership_uses_id_and_name_only() {
        let collection = RuleCollection::custom_collection_from_list("Foo", [r1()]).unwrap();

        // A distinct value with the same (id, name) is a member even though
        // its template and description differ.
        let lookalike = Rule::new("R1", "missing-op", "different template")
            .with_short_description("different");
        assert!(collection.contains(&lookalike));

        assert!(!collection.contains(&Rule::new("R1", "other-name", "x")));
        assert!(!collection.contains(&Rule::new("R9", "missing-op", "x")));
        assert!(!collection.contains(&r2()));
    }

    #[test]
    fn fields_derive_from_kebab_names() {
        let collection = RuleCollection::custom_collection_from_list("Foo", [r1(), r2()]).unwrap();
        assert_eq!(collection.get("missing_op").unwrap().id, "R1");
        assert_eq!(collection.get("unsupported_dtype").unwrap().id, "R2");
        assert!(collection.get("missing-op").is_none());

        let fields: Vec<_> = collection.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec!["missing_op", "unsupported_dtype"]);
    }

    #[test]
    fn colliding_field_names_fail() {
        let a = Rule::new("R1", "missing-op", "a");
        let b = Rule::new("R2", "missing_op", "b");
        let err = RuleCollection::custom_collection_from_list("Foo", [a, b]).unwrap_err();
        match err {
            DiagnosticError::DuplicateField { collection, field } => {
                assert_eq!(collection, "Foo");
                assert_eq!(field, "missing_op");
            }
            other => panic!("expected DuplicateField, got {other:?}"),
        }
    }

    #[test]
    fn same_rule_twice_fails() {
        let err = RuleCollection::custom_collection_from_list("Foo", [r1(), r1()]).unwrap_err();
        assert!(matches!(err, DiagnosticError::DuplicateField { .. }));
    }

    #[test]
    fn invalid_field_name_fails() {
        let bad = Rule::new("R3", "3d-conv", "x");
        let err = RuleCollection::custom_collection_from_list("Foo", [bad]).unwrap_err();
        assert!(matches!(
            err,
            DiagnosticError::InvalidField { ref field, .. } if field == "3d_conv"
        ));
    }

    #[test]
    fn keyword_field_name_fails() {
        let err = RuleCollection::custom_collection_from_list("Foo", [Rule::new("A", "import", "x")])
            .unwrap_err();
        assert!(matches!(
            err,
            DiagnosticError::InvalidField { ref rule, ref field, .. }
                if rule == "import" && field == "import"
        ));
    }

    #[test]
    fn same_id_under_two_names() {
        let a = Rule::new("R1", "first-name", "a");
        let b = Rule::new("R1", "second-name", "b");
        let collection = RuleCollection::custom_collection_from_list("Foo", [a, b]).unwrap();
        assert!(collection.contains(&Rule::new("R1", "first-name", "x")));
        assert!(collection.contains(&Rule::new("R1", "second-name", "x")));
        assert!(!collection.contains(&Rule::new("R1", "third-name", "x")));
    }

    #[test]
    fn shares_arc_rules() {
        let shared = Arc::new(r1());
        let collection =
            RuleCollection::custom_collection_from_list("Foo", [Arc::clone(&shared)]).unwrap();
        assert!(Arc::ptr_eq(collection.get("missing_op").unwrap(), &shared));
    }

    #[test]
    fn explicit_fields() {
        let collection =
            RuleCollection::from_fields("Bar", [("first".to_string(), r1())]).unwrap();
        assert!(collection.contains(&r1()));
        assert!(collection.get("first").is_some());
        assert!(!collection.is_empty());
    }

    #[test]
    fn empty_collection() {
        let collection =
            RuleCollection::custom_collection_from_list("Empty", Vec::<Rule>::new()).unwrap();
        assert!(collection.is_empty());
        assert!(!collection.contains(&r1()));
    }
}
