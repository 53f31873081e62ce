//! sarifkit CLI: inspect rule catalogs and SARIF diagnostic logs.
//!
//! Provides `sarifkit rules` for listing a rule catalog and `sarifkit render`
//! for printing (or normalizing) the diagnostics in a SARIF log.

#![warn(missing_docs)]

mod render;
mod rules;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use sarifkit_config::{ProjectConfig, Verbosity};
use tracing::level_filters::LevelFilter;

/// sarifkit: inspect and render SARIF diagnostics.
#[derive(Parser, Debug)]
#[command(name = "sarifkit", version, about = "SARIF diagnostics toolkit")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `sarifkit.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the rules in a JSON catalog of reporting descriptors.
    Rules(RulesArgs),
    /// Print the diagnostics recorded in a SARIF log.
    Render(RenderArgs),
}

/// Arguments for the `sarifkit rules` subcommand.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to a JSON array of SARIF reporting descriptors.
    pub catalog: PathBuf,

    /// Name given to the resulting rule collection.
    #[arg(long, default_value = "Catalog")]
    pub name: String,
}

/// Arguments for the `sarifkit render` subcommand.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to a SARIF log file.
    pub log: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Treat warnings as errors, overriding the configuration file.
    #[arg(long)]
    pub warnings_as_errors: bool,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Normalized SARIF JSON.
    Json,
}

/// Global settings derived from CLI flags and the configuration file.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// The loaded configuration.
    pub config: ProjectConfig,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_filter(cli.quiet, cli.verbose, config.diagnostics.verbosity))
        .init();

    let color = use_color(cli.color, std::io::stdout().is_terminal());

    let global = GlobalArgs {
        quiet: cli.quiet,
        color,
        config,
    };

    let result = match cli.command {
        Command::Rules(ref args) => rules::run(args, &global),
        Command::Render(ref args) => render::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Loads the configuration from `path`, or from `sarifkit.toml` in the
/// current directory if present, or falls back to defaults.
fn load_config(path: Option<&Path>) -> Result<ProjectConfig, sarifkit_config::ConfigError> {
    match path {
        Some(path) => sarifkit_config::load_config_file(path),
        None => {
            let local = Path::new(sarifkit_config::CONFIG_FILE_NAME);
            if local.is_file() {
                sarifkit_config::load_config_file(local)
            } else {
                Ok(ProjectConfig::default())
            }
        }
    }
}

/// Picks the log level: `--quiet` and `--verbose` override the configured verbosity.
fn level_filter(quiet: bool, verbose: bool, verbosity: Verbosity) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    if verbose {
        return LevelFilter::DEBUG;
    }
    match verbosity {
        Verbosity::Quiet => LevelFilter::ERROR,
        Verbosity::Info => LevelFilter::INFO,
        Verbosity::Debug => LevelFilter::DEBUG,
        Verbosity::Trace => LevelFilter::TRACE,
    }
}

/// Resolves `--color`: `auto` colors only when stdout is a terminal.
fn use_color(choice: ColorChoice, stdout_is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Auto => stdout_is_terminal,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    }
}
