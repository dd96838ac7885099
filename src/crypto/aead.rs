//! AES-256-GCM authenticated encryption
//!
//! Each call draws a fresh random IV, so sealing the same text twice with
//! the same key yields different envelopes. No associated data is bound.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};

use super::envelope::Envelope;
use super::kdf::DerivedKey;
use super::random::Iv;
use super::SecureBytes;
use crate::error::{Result, SealError};

/// Authentication tag length (128 bits)
pub const TAG_LEN: usize = 16;

/// Encrypt raw bytes into an envelope.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Envelope> {
    let cipher = Aes256Gcm::new_from_slice(key.material())
        .map_err(|e| SealError::Encryption(e.to_string()))?;

    let iv = Iv::generate();
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(iv.as_bytes()), plaintext)
        .map_err(|e| SealError::Encryption(e.to_string()))?;

    let envelope = Envelope::new(iv, ciphertext);
    tracing::debug!(bytes = envelope.byte_len(), "sealed envelope");
    Ok(envelope)
}

/// Decrypt an envelope back into raw bytes.
///
/// # Errors
/// `Decryption` when the tag does not verify: wrong key, or a single
/// flipped bit anywhere in the IV, ciphertext or tag.
pub fn open(key: &DerivedKey, envelope: &Envelope) -> Result<SecureBytes> {
    let cipher = Aes256Gcm::new_from_slice(key.material())
        .map_err(|e| SealError::Encryption(e.to_string()))?;

    let plaintext = cipher
        .decrypt(Nonce::from_slice(envelope.iv().as_bytes()), envelope.ciphertext())
        .map_err(|_| SealError::Decryption)?;

    tracing::debug!(bytes = plaintext.len(), "opened envelope");
    Ok(SecureBytes::new(plaintext))
}

/// Encrypt UTF-8 text into a base64 envelope.
pub fn encrypt_text(plaintext: &str, key: &DerivedKey) -> Result<String> {
    Ok(seal(key, plaintext.as_bytes())?.encode())
}

/// Decrypt a base64 envelope into UTF-8 text.
pub fn decrypt_text(envelope: &str, key: &DerivedKey) -> Result<String> {
    let envelope = Envelope::decode(envelope)?;
    open(key, &envelope)?.into_utf8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{derive_key_with, encoding, KdfParams, Salt, IV_LEN};

    fn key(passphrase: &str, salt: &Salt) -> DerivedKey {
        derive_key_with(passphrase, salt, &KdfParams::new(1_000)).unwrap()
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let salt = Salt::generate();
        let k = key("hunter2", &salt);

        let envelope = encrypt_text("Hello, World! This is secret data.", &k).unwrap();
        let decrypted = decrypt_text(&envelope, &k).unwrap();

        assert_eq!(decrypted, "Hello, World! This is secret data.");
    }

    #[test]
    fn test_wrong_key_fails() {
        let salt = Salt::generate();
        let envelope = encrypt_text("Secret message", &key("alpha", &salt)).unwrap();

        let result = decrypt_text(&envelope, &key("bravo", &salt));
        assert!(matches!(result, Err(SealError::Decryption)));
    }

    #[test]
    fn test_wrong_salt_fails() {
        let k1 = key("alpha", &Salt::generate());
        let k2 = key("alpha", &Salt::generate());
        let envelope = encrypt_text("Secret message", &k1).unwrap();

        assert!(matches!(decrypt_text(&envelope, &k2), Err(SealError::Decryption)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let k = key("alpha", &Salt::generate());
        let envelope = seal(&k, b"Secret message").unwrap();

        let mut bytes = envelope.to_bytes();
        bytes[IV_LEN] ^= 0xFF;
        let tampered = Envelope::from_bytes(&bytes).unwrap();

        assert!(matches!(open(&k, &tampered), Err(SealError::Decryption)));
    }

    #[test]
    fn test_every_byte_is_authenticated() {
        let k = key("alpha", &Salt::generate());
        let bytes = seal(&k, b"print('hello')").unwrap().to_bytes();

        for i in 0..bytes.len() {
            let mut tampered = bytes.clone();
            tampered[i] ^= 0x01;
            let text = encoding::encode(&tampered);
            assert!(
                matches!(decrypt_text(&text, &k), Err(SealError::Decryption)),
                "flip at byte {} went unnoticed",
                i
            );
        }
    }

    #[test]
    fn test_same_plaintext_different_envelopes() {
        let k = key("alpha", &Salt::generate());

        let e1 = seal(&k, b"Same message").unwrap();
        let e2 = seal(&k, b"Same message").unwrap();

        assert_ne!(e1.iv(), e2.iv());
        assert_ne!(e1.ciphertext(), e2.ciphertext());
    }

    #[test]
    fn test_envelope_size() {
        let k = key("alpha", &Salt::generate());
        let envelope = seal(&k, b"abc").unwrap();
        assert_eq!(envelope.byte_len(), IV_LEN + 3 + TAG_LEN);
    }

    #[test]
    fn test_empty_plaintext() {
        let k = key("alpha", &Salt::generate());
        let envelope = encrypt_text("", &k).unwrap();
        assert_eq!(decrypt_text(&envelope, &k).unwrap(), "");
    }

    #[test]
    fn test_short_envelope_is_validation_not_decryption() {
        let k = key("alpha", &Salt::generate());
        let short = encoding::encode(&[0u8; IV_LEN]);
        assert!(matches!(decrypt_text(&short, &k), Err(SealError::Validation(_))));
    }

    #[test]
    fn test_non_utf8_plaintext_is_validation_error() {
        let k = key("alpha", &Salt::generate());
        let envelope = seal(&k, &[0xFF, 0xFE, 0xFD]).unwrap().encode();
        assert!(matches!(decrypt_text(&envelope, &k), Err(SealError::Validation(_))));
    }
}
