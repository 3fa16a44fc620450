//! Vault reconciliation over the HTTP API

use async_trait::async_trait;
use keyport_import_types::{ImportError, SyncEngine, SyncOutcome, UserId};
use reqwest::header::CACHE_CONTROL;
use reqwest::StatusCode;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::client::{error_body, VaultApiClient};
use crate::error::VaultClientError;

const SYNC_PATH: &str = "/sync";

#[derive(Debug, Deserialize)]
struct SyncResponse {
    #[serde(default)]
    profile: SyncProfile,
    #[serde(default)]
    ciphers: Vec<serde_json::Value>,
}

/// Account the access token belongs to
#[derive(Debug, Default, Deserialize)]
struct SyncProfile {
    #[serde(default)]
    id: String,
}

/// Last completed sync for a user
#[derive(Debug, Clone, Copy)]
struct SyncRecord {
    completed_at: Instant,
    items_available: bool,
}

/// `SyncEngine` backed by `GET /sync`
///
/// The vault resolves the account from the access token, so a sync only
/// succeeds for the user whose id matches the returned profile. Unforced
/// syncs are debounced per user for `min_sync_interval_secs`.
pub struct HttpSyncEngine {
    api: VaultApiClient,
    min_interval: Duration,
    last_sync: Mutex<HashMap<UserId, SyncRecord>>,
}

impl HttpSyncEngine {
    pub fn new(api: VaultApiClient) -> Self {
        let min_interval = Duration::from_secs(api.config().min_sync_interval_secs);
        Self {
            api,
            min_interval,
            last_sync: Mutex::new(HashMap::new()),
        }
    }

    fn recent_sync(&self, user_id: &UserId) -> Option<SyncRecord> {
        let last_sync = self.last_sync.lock().unwrap_or_else(|e| e.into_inner());
        last_sync
            .get(user_id)
            .copied()
            .filter(|record| record.completed_at.elapsed() < self.min_interval)
    }

    fn remember(&self, user_id: &UserId, items_available: bool) {
        let mut last_sync = self.last_sync.lock().unwrap_or_else(|e| e.into_inner());
        last_sync.retain(|_, record| record.completed_at.elapsed() < self.min_interval);
        last_sync.insert(
            user_id.clone(),
            SyncRecord {
                completed_at: Instant::now(),
                items_available,
            },
        );
    }

    async fn fetch(
        &self,
        user_id: &UserId,
        forced: bool,
    ) -> Result<SyncResponse, VaultClientError> {
        let mut request = self.api.get(SYNC_PATH).query(&[("excludeDomains", "true")]);
        if forced {
            request = request.header(CACHE_CONTROL, "no-cache");
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(VaultClientError::Unauthorized(format!(
                "Vault refused access token ({})",
                status
            )));
        }

        if !status.is_success() {
            return Err(VaultClientError::Status {
                status: status.as_u16(),
                body: error_body(response).await,
            });
        }

        let text = response.text().await?;
        let sync: SyncResponse = serde_json::from_str(&text)?;

        if sync.profile.id != user_id.as_str() {
            return Err(VaultClientError::ProfileMismatch {
                expected: user_id.to_string(),
                actual: sync.profile.id,
            });
        }

        Ok(sync)
    }
}

#[async_trait]
impl SyncEngine for HttpSyncEngine {
    async fn sync(&self, user_id: &UserId, forced: bool) -> SyncOutcome {
        if !forced {
            if let Some(record) = self.recent_sync(user_id) {
                debug!("Skipping sync for {}, last sync is still fresh", user_id);
                return SyncOutcome::Success {
                    items_available: record.items_available,
                };
            }
        }

        match self.fetch(user_id, forced).await {
            Ok(response) => {
                let items_available = !response.ciphers.is_empty();
                self.remember(user_id, items_available);
                info!(
                    "Synced vault for {} ({} items)",
                    user_id,
                    response.ciphers.len()
                );
                SyncOutcome::Success { items_available }
            }
            Err(e) => {
                warn!("Vault sync failed for {}: {}", user_id, e);
                SyncOutcome::Error(ImportError::Sync(e.to_string()))
            }
        }
    }
}
