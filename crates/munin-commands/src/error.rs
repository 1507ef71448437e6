use thiserror::Error;

/// Errors that can occur in the commands system
///
/// Only configuration problems surface as errors. Resolution failures,
/// permission denials and handler faults are reported as
/// [`CommandResult`](crate::CommandResult) values instead.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid command name: {0}")]
    InvalidCommandName(String),

    #[error("Invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("Command has no handler: {0}")]
    MissingHandler(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, CommandError>;
