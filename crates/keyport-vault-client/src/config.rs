//! Vault client configuration

use serde::{Deserialize, Serialize};

use crate::error::VaultClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MIN_SYNC_INTERVAL_SECS: u64 = 30;

/// Connection settings for the remote vault API
#[derive(Clone, Serialize, Deserialize)]
pub struct VaultClientConfig {
    /// API base URL, e.g. `https://vault.example.com/api`
    pub base_url: String,
    /// Bearer token sent with every request
    pub access_token: String,
    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Unforced syncs for the same user within this window are skipped
    #[serde(default = "default_min_sync_interval_secs")]
    pub min_sync_interval_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_min_sync_interval_secs() -> u64 {
    DEFAULT_MIN_SYNC_INTERVAL_SECS
}

fn default_user_agent() -> String {
    format!("keyport/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for VaultClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            min_sync_interval_secs: DEFAULT_MIN_SYNC_INTERVAL_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl VaultClientConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            ..Default::default()
        }
    }

    /// Check that the settings can produce a working client
    pub fn validate(&self) -> Result<(), VaultClientError> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            VaultClientError::Configuration(format!("Invalid base URL '{}': {}", self.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(VaultClientError::Configuration(format!(
                "Base URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.access_token.trim().is_empty() {
            return Err(VaultClientError::Configuration(
                "Access token is required".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(VaultClientError::Configuration(
                "Timeout must be at least one second".to_string(),
            ));
        }

        Ok(())
    }

    /// Join an API path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for VaultClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultClientConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("min_sync_interval_secs", &self.min_sync_interval_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
