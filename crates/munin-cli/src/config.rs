// Application configuration
use std::path::Path;

use munin_commands::DispatcherConfig;
use munin_completion::CompletionConfig;
use serde::{Deserialize, Serialize};

use crate::demo;
use crate::error::CliResult;

/// The `dispatcher` and `completion` sections of the console's YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dispatcher: DispatcherConfig,
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> CliResult<Self> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        munin_commands::ConfigLoader::validate_config(&config.dispatcher)?;
        munin_completion::ConfigLoader::validate_config(&config.completion)?;
        Ok(config)
    }

    /// Fill in the demo host's triggers when none are configured
    pub fn with_demo_triggers(mut self) -> Self {
        if self.completion.triggers.is_empty() {
            self.completion.triggers = demo::default_triggers();
        }
        self
    }
}
