//! Auth config document construction
//!
//! This module builds and renders the registry auth config document
//! and handles password file loading.

pub mod document;
pub mod password;

// Re-export main types
pub use document::{AuthConfig, DockerConfig};
pub use password::load_password_file;
