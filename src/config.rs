//! Configuration management and validation.
//!
//! Holds the settings for talking to the SMN open data service. Defaults
//! point at the public endpoint; the CLI layers its flags on top.

use crate::constants::{DEFAULT_DOWNLOAD_URL, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::error::{Result, SmnError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Settings for feed retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmnConfig {
    /// Download endpoint; the feed selector is appended as a query parameter
    pub base_url: String,

    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for SmnConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DOWNLOAD_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SmnConfig {
    /// Use a different download endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check the settings before any request is made
    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(SmnError::configuration(format!(
                "base URL must be http or https: '{}'",
                self.base_url
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(SmnError::configuration(
                "request timeout must be at least one second",
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(SmnError::configuration("user agent must not be empty"));
        }

        debug!(
            "Configuration valid: {} (timeout {}s)",
            self.base_url, self.request_timeout_secs
        );
        Ok(())
    }
}
