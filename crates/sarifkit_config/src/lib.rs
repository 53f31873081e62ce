//! Parsing and validation of `sarifkit.toml` configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`ProjectConfig`] carrying tool metadata and the [`DiagnosticOptions`]
//! applied to every diagnostic context.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
