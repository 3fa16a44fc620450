//! Error types for the import system

use thiserror::Error;

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

/// Causes that can be surfaced by an import or one of its collaborators
///
/// Causes are cloneable and comparable so that a collaborator's failure can be
/// handed to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    /// The exchange payload could not be decoded into credential records
    #[error("Decode failed: {0}")]
    Decode(String),

    /// The exchange payload uses a format or version this build cannot read
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Transport or connection failure talking to the remote store
    #[error("Network error: {0}")]
    Network(String),

    /// The remote store rejected the supplied credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Reconciliation with the remote store failed
    #[error("Sync failed: {0}")]
    Sync(String),

    /// The remote store rejected the batch without a usable reason
    #[error("Unknown import error")]
    Unknown,

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ImportError {
    fn from(error: serde_json::Error) -> Self {
        ImportError::Decode(error.to_string())
    }
}
