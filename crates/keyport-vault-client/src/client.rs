//! Shared HTTP client for the vault API

use reqwest::{Client, RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

use crate::config::VaultClientConfig;
use crate::error::VaultClientError;

/// Authenticated handle to the vault API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct VaultApiClient {
    client: Client,
    config: VaultClientConfig,
}

impl VaultApiClient {
    /// Create a client after validating the configuration
    pub fn new(config: VaultClientConfig) -> Result<Self, VaultClientError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                VaultClientError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &VaultClientConfig {
        &self.config
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("Vault API request: GET {}", url);
        self.authorized(self.client.get(url))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        debug!("Vault API request: POST {}", url);
        self.authorized(self.client.post(url))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.config.access_token)
    }
}

/// Body of a non-2xx response, empty when it cannot be read
pub(crate) async fn error_body(response: Response) -> String {
    match response.text().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to read vault error response body: {}", e);
            String::new()
        }
    }
}
