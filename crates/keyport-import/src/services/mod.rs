//! Import orchestration services

mod orchestrator;

pub use orchestrator::ImportOrchestrator;

use keyport_import_types::ImportError;

/// Terminal outcome of one payload import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportPayloadResult {
    /// Items were uploaded and local state reconciled
    Success,

    /// The payload held nothing to import; the vault was not contacted
    NoItems,

    /// Items were uploaded but reconciliation failed, so local state may be stale
    SyncFailed(ImportError),

    /// Nothing was stored
    Error(ImportError),
}

impl ImportPayloadResult {
    /// Whether items were both uploaded and synced
    pub fn is_success(&self) -> bool {
        matches!(self, ImportPayloadResult::Success)
    }

    /// Cause carried by a failed import
    pub fn cause(&self) -> Option<&ImportError> {
        match self {
            ImportPayloadResult::SyncFailed(cause) | ImportPayloadResult::Error(cause) => {
                Some(cause)
            }
            ImportPayloadResult::Success | ImportPayloadResult::NoItems => None,
        }
    }
}

impl std::fmt::Display for ImportPayloadResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportPayloadResult::Success => write!(f, "Import completed"),
            ImportPayloadResult::NoItems => write!(f, "No items to import"),
            ImportPayloadResult::SyncFailed(cause) => {
                write!(f, "Items imported but sync failed: {}", cause)
            }
            ImportPayloadResult::Error(cause) => write!(f, "Import failed: {}", cause),
        }
    }
}
