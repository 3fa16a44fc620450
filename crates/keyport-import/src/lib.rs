//! Keyport Import Orchestrator
//!
//! This crate provides the orchestration layer that imports credential
//! exchange payloads into a Keyport vault.
//!
//! # Architecture
//!
//! - **Services**: `ImportOrchestrator` sequences decode, bulk upload and sync
//! - **Outcome**: `ImportPayloadResult` tells the caller which stage stopped the import
//!
//! # Usage
//!
//! The collaborators are injected as trait objects, see `keyport-import-types`.

pub mod services;

pub use services::{ImportOrchestrator, ImportPayloadResult};
