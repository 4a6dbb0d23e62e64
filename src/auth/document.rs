//! The registry auth config document
//!
//! The output format is the `config.json` shape docker and compatible
//! clients read:
//!
//! ```json
//! {"auths":{"<server>":{"username":"<u>","password":"<p>","auth":"<base64(u:p)>"}}}
//! ```

use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use std::collections::HashMap;

/// Credential record for a single registry
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    /// base64 of `username:password`, the conventional basic-auth token
    pub auth: String,
}

/// Top-level auth config document
///
/// Always holds exactly one server entry; merging with an existing
/// config file is out of scope.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct DockerConfig {
    pub auths: HashMap<String, AuthConfig>,
}

impl DockerConfig {
    /// Build a document for a single registry credential
    pub fn new(server: &str, username: &str, password: &str) -> Self {
        let auth = STANDARD.encode(format!("{}:{}", username, password));

        let mut auths = HashMap::with_capacity(1);
        auths.insert(
            server.to_string(),
            AuthConfig {
                username: username.to_string(),
                password: password.to_string(),
                auth,
            },
        );

        DockerConfig { auths }
    }

    /// Serialize to compact JSON
    ///
    /// Credentials may contain quotes and backslashes, so this always
    /// goes through serde_json rather than string formatting.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render the final output line, optionally base64-encoded as a whole
    pub fn render(&self, base64_output: bool) -> Result<String> {
        let json = self.to_json()?;

        if base64_output {
            Ok(STANDARD.encode(json))
        } else {
            Ok(json)
        }
    }
}
