//! Remote completion service settings.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use colloquy_common::defaults::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

/// Credential and endpoint for the chat-completion service.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Bearer credential. `COLLOQUY_API_KEY` takes precedence when set.
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
    /// TCP connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
    /// Whole-request timeout in seconds (valid range: 1-600).
    pub timeout_secs: u32,
}

impl ApiConfig {
    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            connect_timeout_secs: 10,
            timeout_secs: 120,
        }
    }
}
