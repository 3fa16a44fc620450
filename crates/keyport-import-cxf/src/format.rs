//! Credential exchange format document model
//!
//! Only the parts of the format that map onto vault items are modelled.
//! Unknown fields are ignored and unknown credential types deserialize to
//! `CxfCredential::Unsupported`.

use serde::Deserialize;

/// Format major version this decoder understands
pub const SUPPORTED_MAJOR_VERSION: u32 = 1;

/// Top-level exchange document
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxfHeader {
    pub version: CxfVersion,
    #[serde(default)]
    pub exporter_rp_id: String,
    #[serde(default)]
    pub exporter_display_name: String,
    #[serde(default)]
    pub accounts: Vec<CxfAccount>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CxfVersion {
    pub major: u32,
    #[serde(default)]
    pub minor: u32,
}

/// Account of the exporting credential manager
#[derive(Debug, Clone, Deserialize)]
pub struct CxfAccount {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub items: Vec<CxfItem>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxfItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub creation_at: Option<i64>,
    #[serde(default)]
    pub modified_at: Option<i64>,
    #[serde(default)]
    pub favorite: Option<bool>,
    #[serde(default)]
    pub scope: Option<CxfScope>,
    #[serde(default)]
    pub credentials: Vec<CxfCredential>,
}

/// Websites and apps an item applies to
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CxfScope {
    #[serde(default)]
    pub urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CxfCredential {
    BasicAuth {
        #[serde(default)]
        username: Option<CxfField>,
        #[serde(default)]
        password: Option<CxfField>,
    },
    Totp {
        secret: String,
        #[serde(default)]
        period: Option<u32>,
        #[serde(default)]
        digits: Option<u32>,
        #[serde(default)]
        algorithm: Option<String>,
        #[serde(default)]
        issuer: Option<String>,
        #[serde(default)]
        username: Option<String>,
    },
    Note {
        content: CxfField,
    },
    #[serde(other)]
    Unsupported,
}

/// Editable field value
#[derive(Debug, Clone, Deserialize)]
pub struct CxfField {
    pub value: String,
}
