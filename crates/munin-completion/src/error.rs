//! Error types for the completion engine
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown suggestion source: {0}")]
    UnknownSource(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type CompletionResult<T> = Result<T, CompletionError>;
