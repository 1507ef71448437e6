use munin_commands::CommandError;
use munin_completion::CompletionError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("Console error: {0}")]
    Readline(String),
}

impl CliError {
    /// Get a user-friendly error message with a hint
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!("Invalid argument: {}\n\nRun 'munin --help' for usage information.", message)
            }
            CliError::Config(msg) => {
                format!("Configuration error: {}\n\nCheck the file passed with --config.", msg)
            }
            other => other.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Readline(err.to_string())
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
