//! CXF decoder error types

use keyport_import_types::ImportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CxfError {
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Unsupported exchange format version {major}.{minor}")]
    UnsupportedVersion { major: u32, minor: u32 },
}

impl From<CxfError> for ImportError {
    fn from(error: CxfError) -> Self {
        match error {
            CxfError::InvalidPayload(e) => ImportError::Decode(e.to_string()),
            e @ CxfError::UnsupportedVersion { .. } => ImportError::UnsupportedFormat(e.to_string()),
        }
    }
}
