//! Dispatcher configuration loading
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CommandError, Result};
use crate::format::Theme;

/// Supported configuration formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Guess the format from a file extension; YAML unless `.json`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Dispatcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Console word the host exposes, used in help hints
    pub root_command: String,

    /// Colors per semantic category
    pub theme: Theme,

    /// Separator between table columns
    pub column_separator: String,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            root_command: "munin".to_string(),
            theme: Theme::default(),
            column_separator: "  ".to_string(),
        }
    }
}

/// Dispatcher configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load dispatcher configuration from a YAML file
    pub fn load_from_yaml(path: &Path) -> Result<DispatcherConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Yaml)
    }

    /// Load dispatcher configuration from a JSON file
    pub fn load_from_json(path: &Path) -> Result<DispatcherConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Json)
    }

    /// Load dispatcher configuration from a string
    pub fn load_from_string(content: &str, format: ConfigFormat) -> Result<DispatcherConfig> {
        let config: DispatcherConfig = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Validate dispatcher configuration
    pub fn validate_config(config: &DispatcherConfig) -> Result<()> {
        if config.root_command.trim().is_empty() {
            return Err(CommandError::ConfigError(
                "Root command cannot be empty".to_string(),
            ));
        }
        if config.root_command.chars().any(char::is_whitespace) {
            return Err(CommandError::ConfigError(format!(
                "Root command cannot contain whitespace: '{}'",
                config.root_command
            )));
        }
        config.theme.validate().map_err(CommandError::ConfigError)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DispatcherConfig::default();
        assert_eq!(config.root_command, "munin");
        assert_eq!(config.column_separator, "  ");
        assert!(ConfigLoader::validate_config(&config).is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = ConfigLoader::load_from_string(
            "root_command: odin\ntheme:\n  error: \"#AA0000\"\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.root_command, "odin");
        assert_eq!(config.theme.error, "#AA0000");
        assert_eq!(config.theme.success, Theme::default().success);
    }

    #[test]
    fn test_json() {
        let config =
            ConfigLoader::load_from_string(r#"{"column_separator": " | "}"#, ConfigFormat::Json)
                .unwrap();
        assert_eq!(config.column_separator, " | ");
    }

    #[test]
    fn test_invalid_root_command() {
        let result = ConfigLoader::load_from_string("root_command: \"a b\"", ConfigFormat::Yaml);
        assert!(matches!(result, Err(CommandError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_color() {
        let result = ConfigLoader::load_from_string("theme:\n  info: blue\n", ConfigFormat::Yaml);
        assert!(matches!(result, Err(CommandError::ConfigError(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "root_command: thor").unwrap();
        let config = ConfigLoader::load_from_yaml(file.path()).unwrap();
        assert_eq!(config.root_command, "thor");
        assert_eq!(ConfigFormat::from_path(file.path()), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("x.JSON")), ConfigFormat::Json);
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigLoader::load_from_yaml(Path::new("/nonexistent/munin.yaml"));
        assert!(matches!(result, Err(CommandError::IoError(_))));
    }
}
