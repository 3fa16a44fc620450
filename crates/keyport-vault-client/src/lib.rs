//! Keyport vault HTTP client
//!
//! Implements `BulkUploadService` and `SyncEngine` against the vault's REST API.
//! Both services share one `VaultApiClient`, built from a `VaultClientConfig`.

pub mod client;
pub mod config;
pub mod error;
pub mod sync;
pub mod upload;

pub use client::VaultApiClient;
pub use config::VaultClientConfig;
pub use error::VaultClientError;
pub use sync::HttpSyncEngine;
pub use upload::HttpBulkUploadService;
