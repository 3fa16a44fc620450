//! Integration tests for the import pipeline
//!
//! Drives `ImportOrchestrator` through its public API with mockall doubles and
//! checks how often each collaborator is reached.

use async_trait::async_trait;
use keyport_import::{ImportOrchestrator, ImportPayloadResult};
use keyport_import_types::{
    BulkUploadRequest, BulkUploadService, CredentialRecord, ImportError, ImportResult, LoginData,
    PayloadDecoder, SyncEngine, SyncOutcome, UploadOutcome, UserId,
};
use mockall::mock;
use std::collections::HashMap;
use std::sync::Arc;

mock! {
    Decoder {}

    #[async_trait]
    impl PayloadDecoder for Decoder {
        async fn decode(
            &self,
            user_id: &UserId,
            payload: String,
        ) -> ImportResult<Vec<CredentialRecord>>;
    }
}

mock! {
    Uploader {}

    #[async_trait]
    impl BulkUploadService for Uploader {
        async fn upload(&self, request: BulkUploadRequest) -> ImportResult<UploadOutcome>;
    }
}

mock! {
    Syncer {}

    #[async_trait]
    impl SyncEngine for Syncer {
        async fn sync(&self, user_id: &UserId, forced: bool) -> SyncOutcome;
    }
}

fn one_record() -> Vec<CredentialRecord> {
    vec![CredentialRecord::login(
        "example.com",
        LoginData {
            username: Some("alice".to_string()),
            password: Some("s3cret".to_string()),
            ..Default::default()
        },
    )]
}

fn orchestrator(
    decoder: MockDecoder,
    uploader: MockUploader,
    sync: MockSyncer,
) -> ImportOrchestrator {
    ImportOrchestrator::new(Arc::new(decoder), Arc::new(uploader), Arc::new(sync))
}

#[tokio::test]
async fn test_decode_failure_never_reaches_vault() {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_decode()
        .times(1)
        .returning(|_, _| Err(ImportError::Decode("SDK import failed".to_string())));
    let mut uploader = MockUploader::new();
    uploader.expect_upload().never();
    let mut sync = MockSyncer::new();
    sync.expect_sync().never();

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(
        result,
        ImportPayloadResult::Error(ImportError::Decode("SDK import failed".to_string()))
    );
}

#[tokio::test]
async fn test_empty_batch_never_reaches_vault() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().times(1).returning(|_, _| Ok(vec![]));
    let mut uploader = MockUploader::new();
    uploader.expect_upload().never();
    let mut sync = MockSyncer::new();
    sync.expect_sync().never();

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(result, ImportPayloadResult::NoItems);
}

#[tokio::test]
async fn test_upload_failure_never_syncs() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().returning(|_, _| Ok(one_record()));
    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .withf(|request| request.len() == 1)
        .times(1)
        .returning(|_| Err(ImportError::Network("Network import failed".to_string())));
    let mut sync = MockSyncer::new();
    sync.expect_sync().never();

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(
        result,
        ImportPayloadResult::Error(ImportError::Network("Network import failed".to_string()))
    );
}

#[tokio::test]
async fn test_rejected_batch_reports_unknown_error() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().returning(|_, _| Ok(one_record()));
    let mut uploader = MockUploader::new();
    uploader.expect_upload().times(1).returning(|_| {
        Ok(UploadOutcome::Invalid {
            validation_errors: HashMap::new(),
        })
    });
    let mut sync = MockSyncer::new();
    sync.expect_sync().never();

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(result, ImportPayloadResult::Error(ImportError::Unknown));
}

#[tokio::test]
async fn test_sync_failure_is_reported_separately() {
    let mut decoder = MockDecoder::new();
    decoder.expect_decode().returning(|_, _| Ok(one_record()));
    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .times(1)
        .returning(|_| Ok(UploadOutcome::Success));
    let mut sync = MockSyncer::new();
    sync.expect_sync()
        .withf(|user_id, forced| user_id.as_str() == "user-1" && *forced)
        .times(1)
        .returning(|_, _| SyncOutcome::Error(ImportError::Sync("Sync failed".to_string())));

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(
        result,
        ImportPayloadResult::SyncFailed(ImportError::Sync("Sync failed".to_string()))
    );
}

#[tokio::test]
async fn test_full_import_succeeds() {
    let mut decoder = MockDecoder::new();
    decoder
        .expect_decode()
        .withf(|user_id, payload| user_id.as_str() == "user-1" && payload == "payload")
        .times(1)
        .returning(|_, _| Ok(one_record()));
    let mut uploader = MockUploader::new();
    uploader
        .expect_upload()
        .withf(|request| request.len() == 1 && request.items[0].name == "example.com")
        .times(1)
        .returning(|_| Ok(UploadOutcome::Success));
    let mut sync = MockSyncer::new();
    sync.expect_sync()
        .withf(|_, forced| *forced)
        .times(1)
        .returning(|_, _| SyncOutcome::Success {
            items_available: true,
        });

    let result = orchestrator(decoder, uploader, sync)
        .import_payload(&UserId::new("user-1"), "payload".to_string())
        .await;

    assert_eq!(result, ImportPayloadResult::Success);
    assert!(result.is_success());
}
