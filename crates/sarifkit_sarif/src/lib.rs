//! Serde model of the SARIF 2.1.0 containers emitted by `sarifkit`.
//!
//! Only the subset of the schema that the diagnostics layer maps to and from
//! is modeled: the top-level [`SarifLog`], a [`Run`] with its tool driver and
//! rule catalog, and [`SarifResult`]s carrying locations, stacks, graphs, and
//! a property bag. Field names serialize in the schema's camelCase spelling.

#![warn(missing_docs)]

pub mod descriptor;
pub mod level;
pub mod location;
pub mod log;
pub mod message;
pub mod result;

pub use descriptor::{MultiformatMessageString, ReportingDescriptor};
pub use level::{Level, ParseLevelError};
pub use location::{ArtifactLocation, Location, PhysicalLocation, Region, Stack, StackFrame};
pub use log::{Run, SarifLog, Tool, ToolComponent, SARIF_SCHEMA_URI, SARIF_VERSION};
pub use message::{Message, PropertyBag};
pub use result::{Graph, SarifResult};
