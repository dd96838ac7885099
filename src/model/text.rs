//! Text payloads exchanged with the TextBin API

use serde::{Deserialize, Serialize};

use super::{Expiry, ExpiryUnit, Format};
use crate::error::{Result, SealError};

/// Body of a create/update request.
///
/// When `encryption_salt` is set, `content` is a base64 envelope rather
/// than the text itself. The title is always sent in the clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub expires_unit: ExpiryUnit,
    #[serde(default = "default_expires_value")]
    pub expires_value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption_salt: Option<String>,
}

fn default_expires_value() -> u32 {
    1
}

impl TextData {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            format: Format::default(),
            expires_unit: ExpiryUnit::default(),
            expires_value: default_expires_value(),
            encryption_salt: None,
        }
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.expires_unit = expiry.unit;
        self.expires_value = expiry.value;
        self
    }

    pub fn expiry(&self) -> Expiry {
        Expiry {
            unit: self.expires_unit,
            value: self.expires_value,
        }
    }

    pub fn is_encrypted(&self) -> bool {
        self.encryption_salt.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            return Err(SealError::invalid_field("content", "must not be empty"));
        }
        self.expiry().validate()
    }
}

/// A stored text as returned by `GET /texts/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub expires: Option<String>,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(
        default,
        rename = "encryptionSalt",
        alias = "encryption_salt",
        skip_serializing_if = "Option::is_none"
    )]
    pub encryption_salt: Option<String>,
}

impl TextRecord {
    pub fn is_encrypted(&self) -> bool {
        self.encryption_salt.is_some()
    }

    /// Highlighting format, falling back to plaintext for anything unknown.
    pub fn format(&self) -> Format {
        self.format.parse().unwrap_or_default()
    }
}

/// Envelope the API wraps single texts in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextResponse {
    pub text: TextRecord,
}
