//! docker-config - Generate a docker registry auth config from the command line
//!
//! docker-config builds the `{"auths": {...}}` JSON document consumed by
//! container-image clients from a username, password, and server supplied as
//! command-line arguments, with optional base64 output encoding and shell
//! completion scripts.

// Public modules
pub mod auth;
pub mod cli;
pub mod error;
pub mod ui;

// Re-export commonly used types
pub use error::{DockerConfigError, Result};

/// Current version of docker-config
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
