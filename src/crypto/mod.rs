//! Content encryption for TextBin snippets
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA-256 passphrase key derivation
//! - AES-256-GCM authenticated encryption
//! - CSPRNG salt and IV generation
//! - base64 transport encoding of envelopes and salts
//! - Secure memory handling with automatic zeroing
//!
//! Everything here is stateless: keys are derived per call and never cached.

mod aead;
pub mod encoding;
mod envelope;
mod kdf;
mod random;
mod secure_bytes;

pub use aead::{decrypt_text, encrypt_text, open, seal, TAG_LEN};
pub use envelope::Envelope;
pub use kdf::{derive_key, derive_key_with, DerivedKey, KdfParams, DEFAULT_ITERATIONS, KEY_LEN};
pub use random::{generate_iv, generate_salt, Iv, Salt, IV_LEN, SALT_LEN};
pub use secure_bytes::SecureBytes;
