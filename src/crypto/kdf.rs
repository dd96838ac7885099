//! PBKDF2-HMAC-SHA-256 key derivation
//!
//! Turns a passphrase and a 16-byte salt into a 256-bit AES-GCM key.
//! The iteration count is not transmitted with the salt, so every client of
//! one deployment has to agree on it; changing it makes previously sealed
//! content undecryptable.

use hmac::Hmac;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::random::Salt;
use super::SecureBytes;
use crate::error::{Result, SealError};

/// Derived key length in bytes (256 bits for AES-256-GCM)
pub const KEY_LEN: usize = 32;

/// PBKDF2 rounds used by TextBin clients
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Deployment-wide KDF cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    pub iterations: u32,
}

impl KdfParams {
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(SealError::Derivation(
                "iteration count must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

/// A symmetric key bound to one (passphrase, salt) pair.
///
/// The raw bytes never leave the crate; the key can only be handed to
/// [`encrypt_text`](super::encrypt_text) and [`decrypt_text`](super::decrypt_text).
/// Equality is constant-time.
pub struct DerivedKey {
    material: SecureBytes,
}

impl DerivedKey {
    pub(crate) fn material(&self) -> &[u8] {
        &self.material
    }
}

impl PartialEq for DerivedKey {
    fn eq(&self, other: &Self) -> bool {
        self.material.ct_eq(&other.material).into()
    }
}

impl Eq for DerivedKey {}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a key with the default TextBin parameters.
pub fn derive_key(passphrase: &str, salt: &Salt) -> Result<DerivedKey> {
    derive_key_with(passphrase, salt, &KdfParams::default())
}

/// Derive a key with explicit parameters.
pub fn derive_key_with(passphrase: &str, salt: &Salt, params: &KdfParams) -> Result<DerivedKey> {
    params.validate()?;

    tracing::debug!(iterations = params.iterations, "deriving content key");

    let mut material = SecureBytes::zeroed(KEY_LEN);
    pbkdf2::pbkdf2::<Hmac<Sha256>>(
        passphrase.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        material.as_mut_slice(),
    )
    .map_err(|e| SealError::Derivation(e.to_string()))?;

    tracing::debug!("content key derived");

    Ok(DerivedKey { material })
}
