//! Ciphertext envelope
//!
//! Layout before transport encoding:
//! [12 bytes: IV][N bytes: ciphertext][16 bytes: GCM tag]
//!
//! The salt is not part of the envelope; it travels once per submission
//! in its own field.

use super::aead::TAG_LEN;
use super::encoding;
use super::random::{Iv, IV_LEN};
use crate::error::{Result, SealError};

/// One encrypted field, ready for transport.
#[derive(Clone, PartialEq, Eq)]
pub struct Envelope {
    iv: Iv,
    /// Ciphertext with the authentication tag appended
    ciphertext: Vec<u8>,
}

impl Envelope {
    /// Shortest byte length a well-formed envelope can have (empty plaintext).
    pub const MIN_LEN: usize = IV_LEN + TAG_LEN;

    pub(crate) fn new(iv: Iv, ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total length in bytes, IV included.
    pub fn byte_len(&self) -> usize {
        IV_LEN + self.ciphertext.len()
    }

    /// Length of the plaintext this envelope decrypts to.
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len() - TAG_LEN
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.byte_len());
        data.extend_from_slice(self.iv.as_bytes());
        data.extend_from_slice(&self.ciphertext);
        data
    }

    /// Split raw envelope bytes into IV and ciphertext.
    ///
    /// Anything shorter than IV + tag cannot have come from an encryption,
    /// so it is rejected here rather than reported as a failed tag check.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::MIN_LEN {
            return Err(SealError::Validation(format!(
                "envelope is {} bytes, need at least {}",
                data.len(),
                Self::MIN_LEN
            )));
        }

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&data[..IV_LEN]);

        Ok(Self {
            iv: Iv::from_bytes(iv),
            ciphertext: data[IV_LEN..].to_vec(),
        })
    }

    /// base64 text for embedding in JSON.
    pub fn encode(&self) -> String {
        encoding::encode(&self.to_bytes())
    }

    pub fn decode(text: &str) -> Result<Self> {
        Self::from_bytes(&encoding::decode(text)?)
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("iv", &self.iv)
            .field("ciphertext_len", &self.ciphertext.len())
            .finish()
    }
}
