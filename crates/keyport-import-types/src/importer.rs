//! Import collaborator traits
//!
//! Defines the capabilities the import orchestrator is built from. Each trait
//! is object safe so implementations can be swapped behind an `Arc<dyn _>`,
//! for example with test doubles.

use async_trait::async_trait;

use crate::{
    error::ImportResult,
    record::{CredentialRecord, UserId},
    upload::{BulkUploadRequest, SyncOutcome, UploadOutcome},
};

/// Turns an exchange payload into credential records
#[async_trait]
pub trait PayloadDecoder: Send + Sync {
    /// Human-readable name for this decoder
    fn name(&self) -> &str {
        "payload decoder"
    }

    /// Decode the payload for the given user
    ///
    /// Records are returned in payload order. An empty vector is a valid
    /// result and means the payload held nothing importable.
    async fn decode(
        &self,
        user_id: &UserId,
        payload: String,
    ) -> ImportResult<Vec<CredentialRecord>>;
}

/// Stores a batch of records in the remote vault
#[async_trait]
pub trait BulkUploadService: Send + Sync {
    /// Submit the whole batch in one request
    ///
    /// `Err` is reserved for failures where the request never produced an
    /// answer from the store (connection, timeout, authentication). A batch
    /// the store refused is reported as `UploadOutcome::Invalid`.
    async fn upload(&self, request: BulkUploadRequest) -> ImportResult<UploadOutcome>;
}

/// Reconciles local state with the remote vault
#[async_trait]
pub trait SyncEngine: Send + Sync {
    /// Run one reconciliation pass for the user
    ///
    /// `forced` bypasses any staleness or debounce checks the engine applies.
    async fn sync(&self, user_id: &UserId, forced: bool) -> SyncOutcome;
}
