/// Completion configuration loading
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CompletionError, CompletionResult};
use crate::filter::NameFilter;

pub use munin_commands::ConfigFormat;

/// Where a trigger's second-position candidates come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerSource {
    /// Names of the currently active callers
    Roster,
    /// A named suggestion cache
    Cache(String),
}

impl TriggerSource {
    /// Parse `roster` or `cache:<name>`
    pub fn parse(source: &str) -> CompletionResult<Self> {
        let source = source.trim();
        if source.eq_ignore_ascii_case("roster") {
            return Ok(TriggerSource::Roster);
        }
        match source.split_once(':') {
            Some((kind, name)) if kind.eq_ignore_ascii_case("cache") && !name.trim().is_empty() => {
                Ok(TriggerSource::Cache(name.trim().to_string()))
            }
            _ => Err(CompletionError::UnknownSource(source.to_string())),
        }
    }
}

impl fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriggerSource::Roster => write!(f, "roster"),
            TriggerSource::Cache(name) => write!(f, "cache:{}", name),
        }
    }
}

/// A command whose first argument gets externally sourced suggestions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub command: String,
    pub source: String,
}

impl TriggerConfig {
    pub fn new(command: impl Into<String>, source: &TriggerSource) -> Self {
        Self {
            command: command.into(),
            source: source.to_string(),
        }
    }

    pub fn parse_source(&self) -> CompletionResult<TriggerSource> {
        TriggerSource::parse(&self.source)
    }
}

/// Completion settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionConfig {
    pub triggers: Vec<TriggerConfig>,
    pub filter: NameFilter,
}

/// Completion configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load completion configuration from a YAML file
    pub fn load_from_yaml(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Yaml)
    }

    /// Load completion configuration from a JSON file
    pub fn load_from_json(path: &Path) -> CompletionResult<CompletionConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_string(&content, ConfigFormat::Json)
    }

    /// Load completion configuration from a string
    pub fn load_from_string(content: &str, format: ConfigFormat) -> CompletionResult<CompletionConfig> {
        let config: CompletionConfig = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Json => serde_json::from_str(content)?,
        };
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Validate completion configuration
    pub fn validate_config(config: &CompletionConfig) -> CompletionResult<()> {
        for trigger in &config.triggers {
            if trigger.command.trim().is_empty() {
                return Err(CompletionError::ConfigError(
                    "Trigger command cannot be empty".to_string(),
                ));
            }
            if trigger.command.chars().any(char::is_whitespace) {
                return Err(CompletionError::ConfigError(format!(
                    "Trigger command cannot contain whitespace: '{}'",
                    trigger.command
                )));
            }
            trigger.parse_source()?;
        }
        if config.filter.min_length == 0 {
            return Err(CompletionError::ConfigError(
                "Filter min_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
