//! Credential record types
//!
//! Internal representation of the items an import creates in the vault.

use serde::{Deserialize, Serialize};

/// Identifier of the user an import runs for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of vault item a record becomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CredentialKind {
    /// Website or application login
    Login,
    /// Free-form secure note
    SecureNote,
}

/// One importable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialRecord {
    /// Display name of the item
    pub name: String,
    /// Item kind
    #[serde(rename = "type")]
    pub kind: CredentialKind,
    /// Login details (present for `CredentialKind::Login`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<LoginData>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Whether the item is marked as favorite
    #[serde(default)]
    pub favorite: bool,
    /// Creation time reported by the exporter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    /// Last modification time reported by the exporter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl CredentialRecord {
    /// Create an empty login record with the given name
    pub fn login(name: impl Into<String>, login: LoginData) -> Self {
        Self {
            name: name.into(),
            kind: CredentialKind::Login,
            login: Some(login),
            notes: None,
            favorite: false,
            created_at: None,
            modified_at: None,
        }
    }

    /// Create a secure note record
    pub fn secure_note(name: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CredentialKind::SecureNote,
            login: None,
            notes: Some(notes.into()),
            favorite: false,
            created_at: None,
            modified_at: None,
        }
    }
}

/// Login details of a credential record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// `otpauth://` URI for the item's one-time password generator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totp: Option<String>,
    #[serde(default)]
    pub uris: Vec<LoginUri>,
}

/// Website or app the login belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginUri {
    pub uri: String,
}

impl LoginUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display() {
        let user = UserId::new("user-1");
        assert_eq!(user.to_string(), "user-1");
        assert_eq!(user.as_str(), "user-1");
    }

    #[test]
    fn test_login_record_serializes_with_type_field() {
        let record = CredentialRecord::login(
            "Example",
            LoginData {
                username: Some("alice".to_string()),
                password: Some("hunter2".to_string()),
                totp: None,
                uris: vec![LoginUri::new("https://example.com")],
            },
        );

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["type"], "login");
        assert_eq!(json["login"]["username"], "alice");
        assert_eq!(json["login"]["uris"][0]["uri"], "https://example.com");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_secure_note_has_no_login() {
        let record = CredentialRecord::secure_note("Wifi", "ssid: home");
        assert_eq!(record.kind, CredentialKind::SecureNote);
        assert!(record.login.is_none());
        assert_eq!(record.notes.as_deref(), Some("ssid: home"));
    }
}
