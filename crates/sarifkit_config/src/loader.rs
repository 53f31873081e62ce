//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// The configuration file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "sarifkit.toml";

/// Loads and validates `sarifkit.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    load_config_file(&project_dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates a configuration file at an explicit path.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present when their table is.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if let Some(tool) = &config.tool {
        if tool.name.trim().is_empty() {
            return Err(ConfigError::MissingField("tool.name".to_string()));
        }
        if !tool.version.is_empty() && tool.version.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "tool.version must not be blank".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Verbosity;
    use tempfile::TempDir;

    #[test]
    fn parse_full_config() {
        let toml = r#"
[tool]
name = "exporter"
version = "1.0"

[diagnostics]
warnings_as_errors = true
verbosity = "debug"
"#;
        let config = load_config_from_str(toml).unwrap();
        let tool = config.tool.unwrap();
        assert_eq!(tool.name, "exporter");
        assert_eq!(tool.version, "1.0");
        assert!(config.diagnostics.warnings_as_errors);
        assert_eq!(config.diagnostics.verbosity, Verbosity::Debug);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert!(config.tool.is_none());
        assert!(!config.diagnostics.warnings_as_errors);
        assert_eq!(config.diagnostics.verbosity, Verbosity::Info);
    }

    #[test]
    fn missing_tool_name_errors() {
        let toml = r#"
[tool]
name = ""
version = "1.0"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn blank_version_errors() {
        let toml = r#"
[tool]
name = "exporter"
version = "   "
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn unknown_verbosity_errors() {
        let toml = r#"
[diagnostics]
verbosity = "chatty"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_directory() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[diagnostics]\nwarnings_as_errors = true\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!(config.diagnostics.warnings_as_errors);
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
