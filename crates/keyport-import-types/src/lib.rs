//! Core types and traits for the Keyport import system
//!
//! This crate provides the foundational abstractions for importing credential
//! exchange payloads into a Keyport vault.
//!
//! # Architecture
//!
//! - **Traits**: `PayloadDecoder`, `BulkUploadService` and `SyncEngine` are the
//!   collaborators the import orchestrator is composed from
//! - **Types**: `CredentialRecord`, `BulkUploadRequest`, `UploadOutcome`, `SyncOutcome`
//! - **Errors**: `ImportError`, the cause carried by every failed import
//!
//! # Usage
//!
//! Collaborator implementations (e.g., `keyport-import-cxf`) depend on this
//! crate and implement one of the traits.

pub mod error;
pub mod importer;
pub mod record;
pub mod upload;

pub use error::{ImportError, ImportResult};
pub use importer::{BulkUploadService, PayloadDecoder, SyncEngine};
pub use record::{CredentialKind, CredentialRecord, LoginData, LoginUri, UserId};
pub use upload::{BulkUploadRequest, SyncOutcome, UploadOutcome};
