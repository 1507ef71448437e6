//! Error types for the permissions system

use thiserror::Error;

/// Result type for permissions operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the permissions system
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid permission level: {0}")]
    InvalidPermissionLevel(String),
}
