//! CXF payload decoder implementation

use async_trait::async_trait;
use keyport_import_types::{
    CredentialRecord, ImportResult, LoginData, LoginUri, PayloadDecoder, UserId,
};
use tracing::{debug, info};

use crate::error::CxfError;
use crate::format::{CxfCredential, CxfHeader, CxfItem, SUPPORTED_MAJOR_VERSION};

/// Name given to items that carry neither a title nor a usable URL
const FALLBACK_ITEM_NAME: &str = "Imported item";

/// Decoder for JSON credential exchange payloads
#[derive(Debug, Clone, Default)]
pub struct CxfPayloadDecoder;

impl CxfPayloadDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Parse and version-check a payload
    pub fn parse(payload: &str) -> Result<CxfHeader, CxfError> {
        let header: CxfHeader = serde_json::from_str(payload)?;

        if header.version.major != SUPPORTED_MAJOR_VERSION {
            return Err(CxfError::UnsupportedVersion {
                major: header.version.major,
                minor: header.version.minor,
            });
        }

        Ok(header)
    }

    /// Flatten every account's items into records, keeping payload order
    pub fn convert(header: &CxfHeader) -> Vec<CredentialRecord> {
        let mut records = Vec::new();

        for account in &header.accounts {
            debug!(
                "Converting {} items from exported account {}",
                account.items.len(),
                account.id
            );

            for item in &account.items {
                match Self::convert_item(item) {
                    Some(record) => records.push(record),
                    None => debug!(
                        "Skipping item {} without supported credentials",
                        item.id
                    ),
                }
            }
        }

        records
    }

    /// Convert one exchange item into a vault record
    ///
    /// Returns `None` when the item has no credential this decoder maps.
    pub fn convert_item(item: &CxfItem) -> Option<CredentialRecord> {
        let urls = item
            .scope
            .as_ref()
            .map(|scope| scope.urls.clone())
            .unwrap_or_default();
        let name = item_name(&item.title, &urls);

        let mut login: Option<LoginData> = None;
        let mut note: Option<String> = None;

        for credential in &item.credentials {
            match credential {
                CxfCredential::BasicAuth { username, password } => {
                    let data = login.get_or_insert_with(LoginData::default);
                    if data.username.is_none() && data.password.is_none() {
                        data.username = username.as_ref().map(|f| f.value.clone());
                        data.password = password.as_ref().map(|f| f.value.clone());
                    }
                }
                CxfCredential::Totp {
                    secret,
                    period,
                    digits,
                    algorithm,
                    issuer,
                    username,
                } => {
                    let data = login.get_or_insert_with(LoginData::default);
                    if data.totp.is_none() {
                        let label = username.as_deref().unwrap_or(name.as_str());
                        data.totp = Some(build_totp_uri(
                            label,
                            secret,
                            issuer.as_deref(),
                            algorithm.as_deref(),
                            *digits,
                            *period,
                        ));
                    }
                }
                CxfCredential::Note { content } => {
                    if note.is_none() {
                        note = Some(content.value.clone());
                    }
                }
                CxfCredential::Unsupported => {}
            }
        }

        let mut record = match (login, note) {
            (Some(mut data), note) => {
                data.uris = urls.into_iter().map(LoginUri::new).collect();
                let mut record = CredentialRecord::login(name, data);
                record.notes = note;
                record
            }
            (None, Some(note)) => CredentialRecord::secure_note(name, note),
            (None, None) => return None,
        };

        record.favorite = item.favorite.unwrap_or(false);
        record.created_at = item
            .creation_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));
        record.modified_at = item
            .modified_at
            .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0));

        Some(record)
    }
}

#[async_trait]
impl PayloadDecoder for CxfPayloadDecoder {
    fn name(&self) -> &str {
        "CXF payload decoder"
    }

    async fn decode(
        &self,
        user_id: &UserId,
        payload: String,
    ) -> ImportResult<Vec<CredentialRecord>> {
        let header = Self::parse(&payload)?;

        debug!(
            "Decoding payload exported by {} ({} accounts) for user {}",
            header.exporter_display_name,
            header.accounts.len(),
            user_id
        );

        let records = Self::convert(&header);

        info!(
            "Decoded {} records from {} payload",
            records.len(),
            header.exporter_rp_id
        );
        Ok(records)
    }
}

/// Pick a display name: the title, else the first URL's host, else a fixed fallback
fn item_name(title: &str, urls: &[String]) -> String {
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }

    urls.iter()
        .find_map(|u| {
            url::Url::parse(u)
                .ok()
                .and_then(|parsed| parsed.host_str().map(str::to_string))
        })
        .unwrap_or_else(|| FALLBACK_ITEM_NAME.to_string())
}

/// Build an `otpauth://totp/` URI from exchange TOTP fields
fn build_totp_uri(
    label: &str,
    secret: &str,
    issuer: Option<&str>,
    algorithm: Option<&str>,
    digits: Option<u32>,
    period: Option<u32>,
) -> String {
    let label = match issuer {
        Some(issuer) if !issuer.is_empty() => format!("{}:{}", issuer, label),
        _ => label.to_string(),
    };

    let mut uri = format!(
        "otpauth://totp/{}?secret={}",
        urlencoding::encode(&label),
        urlencoding::encode(secret)
    );

    if let Some(issuer) = issuer.filter(|i| !i.is_empty()) {
        uri.push_str(&format!("&issuer={}", urlencoding::encode(issuer)));
    }
    if let Some(algorithm) = algorithm {
        uri.push_str(&format!(
            "&algorithm={}",
            urlencoding::encode(&algorithm.to_uppercase())
        ));
    }
    if let Some(digits) = digits {
        uri.push_str(&format!("&digits={}", digits));
    }
    if let Some(period) = period {
        uri.push_str(&format!("&period={}", period));
    }

    uri
}
