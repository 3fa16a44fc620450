//! CXF Payload Decoder
//!
//! Implements the `PayloadDecoder` trait for JSON credential exchange payloads.

pub mod error;
pub mod format;
pub mod importer;

pub use error::CxfError;
pub use importer::CxfPayloadDecoder;
