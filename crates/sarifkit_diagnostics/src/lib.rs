//! Diagnostic collection and SARIF export for compiler/export pipelines.
//!
//! This crate layers a small object model over the SARIF containers in
//! [`sarifkit_sarif`]: [`Rule`]s describe diagnostic categories, a
//! [`Diagnostic`] ties a rule to a [`Level`] plus [`Location`]s, [`Stack`]s,
//! [`Graph`]s, and [`Tag`]s, and a [`DiagnosticContext`] accumulates the
//! diagnostics of one processing run and exports them as a SARIF [`Run`].
//! [`RuleCollection`] groups the rules a checker declares, and
//! [`TerminalRenderer`] prints diagnostics for humans.
//!
//! [`Run`]: sarifkit_sarif::Run

#![warn(missing_docs)]

pub mod collection;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod graph;
pub mod location;
pub mod renderer;
pub mod rule;
pub mod tag;
pub mod template;

pub use collection::RuleCollection;
pub use context::DiagnosticContext;
pub use diagnostic::{Diagnostic, Reportable};
pub use error::{DiagnosticError, TemplateError};
pub use graph::Graph;
pub use location::{Location, Stack};
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use rule::Rule;
pub use sarifkit_config::{DiagnosticOptions, Verbosity};
pub use sarifkit_sarif::Level;
pub use tag::Tag;
pub use template::{format_template, kebab_case_to_snake_case, TemplateArgs};
