//! Bulk upload and sync exchange types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{error::ImportError, record::CredentialRecord};

/// Batch of records submitted to the remote store in one call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkUploadRequest {
    pub items: Vec<CredentialRecord>,
}

impl BulkUploadRequest {
    pub fn new(items: Vec<CredentialRecord>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Response of the remote store to a bulk upload that reached it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Every item was stored
    Success,
    /// The batch was rejected; errors are keyed by the offending item or field
    Invalid {
        validation_errors: HashMap<String, Vec<String>>,
    },
}

/// Result of reconciling local state with the remote store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Success { items_available: bool },
    Error(ImportError),
}
