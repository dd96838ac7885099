//! Caller-side orchestration: sealing a draft before submission and
//! opening a stored text after a passphrase prompt.
//!
//! One salt is drawn per submission and shipped in `encryptionSalt`;
//! the key is re-derived on every call and dropped straight after.

use crate::crypto::{self, KdfParams, Salt};
use crate::error::{Result, SealError};
use crate::model::{TextData, TextRecord, TextResponse};

/// Anything carrying a possibly-encrypted `content` field and its salt.
pub trait SealedText {
    fn content(&self) -> &str;
    fn encryption_salt(&self) -> Option<&str>;
}

impl SealedText for TextData {
    fn content(&self) -> &str {
        &self.content
    }

    fn encryption_salt(&self) -> Option<&str> {
        self.encryption_salt.as_deref()
    }
}

impl SealedText for TextRecord {
    fn content(&self) -> &str {
        &self.content
    }

    fn encryption_salt(&self) -> Option<&str> {
        self.encryption_salt.as_deref()
    }
}

impl SealedText for TextResponse {
    fn content(&self) -> &str {
        &self.text.content
    }

    fn encryption_salt(&self) -> Option<&str> {
        self.text.encryption_salt.as_deref()
    }
}

/// Encrypt the content of a plaintext draft.
///
/// Returns a copy with `content` replaced by the envelope and
/// `encryption_salt` set. The title is left as-is.
pub fn seal_draft(draft: &TextData, passphrase: &str, params: &KdfParams) -> Result<TextData> {
    if draft.is_encrypted() {
        return Err(SealError::invalid_field(
            "encryptionSalt",
            "draft is already encrypted",
        ));
    }
    draft.validate()?;

    let salt = crypto::generate_salt();
    let key = crypto::derive_key_with(passphrase, &salt, params)?;
    let content = crypto::encrypt_text(&draft.content, &key)?;

    tracing::debug!(format = %draft.format, "sealed draft");

    Ok(TextData {
        content,
        encryption_salt: Some(salt.to_base64()),
        ..draft.clone()
    })
}

/// Recover the plaintext content of a stored or submitted text.
///
/// Texts without a salt were never encrypted and are returned unchanged.
///
/// # Errors
/// `Decryption` for a wrong passphrase; the caller should prompt again.
/// `Validation` for a malformed salt or envelope.
pub fn open_text<T: SealedText + ?Sized>(
    text: &T,
    passphrase: &str,
    params: &KdfParams,
) -> Result<String> {
    let Some(salt) = text.encryption_salt() else {
        return Ok(text.content().to_owned());
    };

    let salt = Salt::from_base64(salt)?;
    let key = crypto::derive_key_with(passphrase, &salt, params)?;
    crypto::decrypt_text(text.content(), &key)
}
