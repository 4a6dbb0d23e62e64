//! Error types for docker-config

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docker-config operations
pub type Result<T> = std::result::Result<T, DockerConfigError>;

/// Main error type for docker-config
#[derive(Error, Debug)]
pub enum DockerConfigError {
    /// Missing or empty credential fields
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Password file loading errors
    #[error("{0}")]
    PasswordFile(#[from] PasswordFileError),

    /// Completion script generation errors
    #[error("unsupported shell: {0} (expected bash or zsh)")]
    UnsupportedShell(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Credential validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("username cannot be empty")]
    MissingUsername,

    #[error("server cannot be empty")]
    MissingServer,

    #[error("password cannot be empty (use --password or --password-file)")]
    MissingPassword,
}

/// Password file loading errors
#[derive(Error, Debug)]
pub enum PasswordFileError {
    #[error("password file '{0}' is not a regular file")]
    NotAFile(PathBuf),

    #[error("failed to read password file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("password file '{0}' is empty")]
    Empty(PathBuf),
}

impl DockerConfigError {
    /// Whether the usage text should follow this error on stderr
    pub fn wants_usage(&self) -> bool {
        matches!(self, DockerConfigError::Validation(_))
    }
}

/// Specialized result type for password file operations
pub type PasswordFileResult<T> = std::result::Result<T, PasswordFileError>;
