//! Salt and IV generation
//!
//! Both come straight from the operating system CSPRNG. A salt is drawn
//! once per submission; an IV is drawn for every single encryption.

use std::fmt;

use rand::rngs::OsRng;
use rand::RngCore;

/// Salt length in bytes (128 bits)
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes (96 bits)
pub const IV_LEN: usize = 12;

/// Random salt mixed into key derivation. Not secret.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    pub fn generate() -> Self {
        let mut bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Text form carried in the `encryptionSalt` field.
    pub fn to_base64(&self) -> String {
        super::encoding::encode_salt(self)
    }

    pub fn from_base64(text: &str) -> crate::error::Result<Self> {
        super::encoding::decode_salt(text)
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt({})", hex::encode(self.0))
    }
}

/// Per-encryption nonce. A (key, IV) pair must never repeat.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iv([u8; IV_LEN]);

impl Iv {
    pub fn generate() -> Self {
        let mut bytes = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; IV_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; IV_LEN] {
        &self.0
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({})", hex::encode(self.0))
    }
}

pub fn generate_salt() -> Salt {
    Salt::generate()
}

pub fn generate_iv() -> Iv {
    Iv::generate()
}
