//! Error types for diagnostic construction, collection, and export.

/// Errors raised while building rules, collections, and contexts.
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticError {
    /// A diagnostic of the wrong concrete type was added to a context.
    #[error("expected diagnostic of type {expected}, got {found}")]
    TypeMismatch {
        /// The context's diagnostic type.
        expected: &'static str,
        /// The type that was offered.
        found: &'static str,
    },

    /// A SARIF object lacks a field this model requires.
    #[error("{owner} is missing required field '{field}'")]
    MissingField {
        /// Describes the object that was being read.
        owner: String,
        /// The schema path of the missing field.
        field: &'static str,
    },

    /// A rule name does not transform into a valid field identifier.
    #[error("rule '{rule}' maps to invalid field name '{field}' in collection {collection}")]
    InvalidField {
        /// The collection being built.
        collection: String,
        /// The offending rule name.
        rule: String,
        /// The transformed field name.
        field: String,
    },

    /// Two rules map to the same field name within one collection.
    #[error("field '{field}' is defined more than once in collection {collection}")]
    DuplicateField {
        /// The collection being built.
        collection: String,
        /// The colliding field name.
        field: String,
    },

    /// A SARIF result refers to a rule id absent from the driver's catalog.
    #[error("result refers to unknown rule '{0}'")]
    UnknownRule(String),

    /// A message template could not be formatted.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// SARIF (de)serialization failed.
    #[error("failed to serialize SARIF: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing a SARIF file failed.
    #[error("failed to write SARIF: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while substituting arguments into a message template.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A positional field has no matching argument.
    #[error("template refers to positional argument {index}, but {given} were given")]
    MissingPositional {
        /// The referenced index.
        index: usize,
        /// How many positional arguments were supplied.
        given: usize,
    },

    /// A named field has no matching argument.
    #[error("template refers to missing named argument '{0}'")]
    MissingNamed(String),

    /// A brace is not part of a field or an escape.
    #[error("unmatched '{brace}' at byte {position} in template")]
    UnmatchedBrace {
        /// The offending brace.
        brace: char,
        /// Byte offset of the brace.
        position: usize,
    },

    /// The template mixes `{}` and `{0}` fields.
    #[error("cannot switch between automatic and manual field numbering")]
    MixedNumbering,

    /// A field uses a conversion, format spec, or attribute access.
    #[error("unsupported format specification in field '{{{0}}}'")]
    UnsupportedSpec(String),
}
