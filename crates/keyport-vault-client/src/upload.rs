//! Bulk upload over the vault HTTP API

use async_trait::async_trait;
use keyport_import_types::{
    BulkUploadRequest, BulkUploadService, CredentialRecord, ImportResult, UploadOutcome,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::client::{error_body, VaultApiClient};
use crate::error::VaultClientError;

const IMPORT_PATH: &str = "/ciphers/import";

/// Body of the vault's import endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportCiphersRequest<'a> {
    ciphers: &'a [CredentialRecord],
    folders: Vec<serde_json::Value>,
    folder_relationships: Vec<serde_json::Value>,
}

/// Error body returned with a 400 response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<HashMap<String, Vec<String>>>,
}

/// `BulkUploadService` backed by `POST /ciphers/import`
#[derive(Debug, Clone)]
pub struct HttpBulkUploadService {
    api: VaultApiClient,
}

impl HttpBulkUploadService {
    pub fn new(api: VaultApiClient) -> Self {
        Self { api }
    }

    async fn send(&self, request: &BulkUploadRequest) -> Result<UploadOutcome, VaultClientError> {
        let body = ImportCiphersRequest {
            ciphers: &request.items,
            folders: Vec::new(),
            folder_relationships: Vec::new(),
        };

        let response = self.api.post(IMPORT_PATH).json(&body).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(UploadOutcome::Success);
        }

        let body = error_body(response).await;

        match status {
            StatusCode::BAD_REQUEST => {
                let parsed: ValidationErrorResponse =
                    serde_json::from_str(&body).unwrap_or_default();
                if let Some(message) = &parsed.message {
                    debug!("Vault rejected import: {}", message);
                }
                Ok(UploadOutcome::Invalid {
                    validation_errors: parsed.validation_errors.unwrap_or_default(),
                })
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(VaultClientError::Unauthorized(format!(
                    "Vault refused access token ({})",
                    status
                )))
            }
            _ => Err(VaultClientError::Status {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

#[async_trait]
impl BulkUploadService for HttpBulkUploadService {
    async fn upload(&self, request: BulkUploadRequest) -> ImportResult<UploadOutcome> {
        info!("Uploading {} items to vault", request.len());

        match self.send(&request).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!("Vault import request failed: {}", e);
                Err(e.into())
            }
        }
    }
}
