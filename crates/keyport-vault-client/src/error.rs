//! Vault client error types

use keyport_import_types::ImportError;
use thiserror::Error;

/// Vault API errors
#[derive(Error, Debug)]
pub enum VaultClientError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Vault profile '{actual}' does not belong to user '{expected}'")]
    ProfileMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<VaultClientError> for ImportError {
    fn from(error: VaultClientError) -> Self {
        match error {
            VaultClientError::Configuration(msg) => ImportError::Internal(msg),
            VaultClientError::Unauthorized(msg) => ImportError::Unauthorized(msg),
            e => ImportError::Network(e.to_string()),
        }
    }
}
