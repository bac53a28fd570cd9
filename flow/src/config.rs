use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::session::SessionConfig;

pub const CONFIG_ENV_VAR: &str = "LOGIN_BOT_CONFIG";

const DEFAULT_START_URL: &str = "http://localhost:8082/login";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SUCCESS_MARKER: &str = "Login Successful";
const DEFAULT_PREVIEW_CHARS: usize = 500;

/// Walker configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Start URL used when none is given (default: <http://localhost:8082/login>)
    pub default_start_url: String,
    /// Per-request timeout in seconds (default: 10)
    pub timeout_secs: u64,
    /// Text the final page must contain (default: "Login Successful")
    pub success_marker: String,
    /// Body characters shown when the marker is missing (default: 500)
    pub preview_chars: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            default_start_url: DEFAULT_START_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            success_marker: DEFAULT_SUCCESS_MARKER.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl WalkerConfig {
    /// Load configuration from the `LOGIN_BOT_CONFIG` JSON document, or use defaults
    pub fn from_env() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| format!("Failed to parse {CONFIG_ENV_VAR}"))
    }

    /// Session settings for the walker's HTTP client
    pub fn session(&self) -> SessionConfig {
        SessionConfig::new(Duration::from_secs(self.timeout_secs))
    }
}
