//! Import orchestrator service
//!
//! Runs a credential exchange payload through decode, bulk upload and sync.

use std::sync::Arc;

use keyport_import_types::{
    BulkUploadRequest, BulkUploadService, ImportError, PayloadDecoder, SyncEngine, SyncOutcome,
    UploadOutcome, UserId,
};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::ImportPayloadResult;

/// Import orchestrator coordinating the decoder, the vault and the sync engine
///
/// The orchestrator keeps no state between calls; concurrent imports share
/// nothing but the collaborator handles.
pub struct ImportOrchestrator {
    decoder: Arc<dyn PayloadDecoder>,
    uploader: Arc<dyn BulkUploadService>,
    sync_engine: Arc<dyn SyncEngine>,
}

impl ImportOrchestrator {
    /// Create a new import orchestrator from its collaborators
    pub fn new(
        decoder: Arc<dyn PayloadDecoder>,
        uploader: Arc<dyn BulkUploadService>,
        sync_engine: Arc<dyn SyncEngine>,
    ) -> Self {
        Self {
            decoder,
            uploader,
            sync_engine,
        }
    }

    /// Import an exchange payload for a user
    ///
    /// Stops at the first stage that fails or yields nothing. Nothing is
    /// retried and nothing already stored is rolled back.
    pub async fn import_payload(&self, user_id: &UserId, payload: String) -> ImportPayloadResult {
        let import_id = Uuid::new_v4();
        let span = info_span!("import_payload", %import_id, user_id = %user_id);

        self.run_pipeline(user_id, payload).instrument(span).await
    }

    async fn run_pipeline(&self, user_id: &UserId, payload: String) -> ImportPayloadResult {
        debug!(
            "Decoding {} byte payload with {}",
            payload.len(),
            self.decoder.name()
        );

        let records = match self.decoder.decode(user_id, payload).await {
            Ok(records) => records,
            Err(e) => {
                warn!("Failed to decode import payload: {}", e);
                return ImportPayloadResult::Error(e);
            }
        };

        if records.is_empty() {
            info!("Import payload contained no items");
            return ImportPayloadResult::NoItems;
        }

        let request = BulkUploadRequest::new(records);
        info!("Uploading {} items", request.len());

        match self.uploader.upload(request).await {
            Ok(UploadOutcome::Success) => {}
            Ok(UploadOutcome::Invalid { validation_errors }) => {
                warn!(
                    "Vault rejected import batch ({} items with validation errors)",
                    validation_errors.len()
                );
                for (item, messages) in &validation_errors {
                    warn!("Validation error for {}: {}", item, messages.join("; "));
                }
                return ImportPayloadResult::Error(ImportError::Unknown);
            }
            Err(e) => {
                warn!("Bulk upload failed: {}", e);
                return ImportPayloadResult::Error(e);
            }
        }

        match self.sync_engine.sync(user_id, true).await {
            SyncOutcome::Success { items_available } => {
                info!(
                    "Import completed (items available after sync: {})",
                    items_available
                );
                ImportPayloadResult::Success
            }
            SyncOutcome::Error(e) => {
                warn!("Items were uploaded but sync failed: {}", e);
                ImportPayloadResult::SyncFailed(e)
            }
        }
    }
}
