//! End-to-end sealing and opening with the production KDF cost.

use textbin_seal::crypto::{
    decrypt_text, derive_key, encrypt_text, Envelope, KdfParams, Salt, DEFAULT_ITERATIONS,
};
use textbin_seal::model::{Format, TextData, TextResponse};
use textbin_seal::snippet::{open_text, seal_draft};
use textbin_seal::SealError;

const PASSPHRASE: &str = "correct horse battery staple";

#[test]
fn python_snippet_scenario() {
    let salt = Salt::generate();
    let key = derive_key(PASSPHRASE, &salt).unwrap();

    let envelope = encrypt_text("print('hello')", &key).unwrap();
    assert!(envelope.len() > 24);

    // Receiver re-derives from the transmitted salt.
    let salt_field = salt.to_base64();
    let received = Salt::from_base64(&salt_field).unwrap();
    let key = derive_key(PASSPHRASE, &received).unwrap();
    assert_eq!(decrypt_text(&envelope, &key).unwrap(), "print('hello')");

    let wrong = derive_key("wrong password", &received).unwrap();
    assert!(matches!(decrypt_text(&envelope, &wrong), Err(SealError::Decryption)));
}

/// Sealed with WebCrypto (PBKDF2 + AES-GCM) exactly as the TextBin web
/// client does it, using salt 00..0f and IV a0..ab.
const BROWSER_SALT: &str = "AAECAwQFBgcICQoLDA0ODw==";
const BROWSER_CONTENT: &str = "oKGio6SlpqeoqaqrWSESOzFu2F/y4qt5hPcDK910xEWO34F7nNqwvpiQ";

#[test]
fn opens_text_sealed_by_web_client() {
    let record = TextData {
        encryption_salt: Some(BROWSER_SALT.into()),
        ..TextData::new("hello", BROWSER_CONTENT).with_format(Format::Python)
    };

    let text = open_text(&record, PASSPHRASE, &KdfParams::default()).unwrap();
    assert_eq!(text, "print('hello')");

    assert!(matches!(
        open_text(&record, "wrong password", &KdfParams::default()),
        Err(SealError::Decryption)
    ));
}

#[test]
fn web_client_envelope_layout() {
    let envelope = Envelope::decode(BROWSER_CONTENT).unwrap();

    // IV leads, tag trails the 14 bytes of ciphertext.
    let iv: Vec<u8> = (0xa0..=0xab).collect();
    assert_eq!(envelope.iv().as_bytes().as_slice(), iv.as_slice());
    assert_eq!(envelope.plaintext_len(), "print('hello')".len());
    assert_eq!(envelope.encode(), BROWSER_CONTENT);

    let salt = Salt::from_base64(BROWSER_SALT).unwrap();
    assert_eq!(salt.as_bytes(), &core::array::from_fn::<u8, 16, _>(|i| i as u8));
    assert_eq!(salt.to_base64(), BROWSER_SALT);
}

#[test]
fn derivation_is_deterministic_at_default_cost() {
    let salt = Salt::from_bytes([9u8; 16]);
    assert_eq!(
        derive_key(PASSPHRASE, &salt).unwrap(),
        derive_key(PASSPHRASE, &salt).unwrap()
    );
}

#[test]
fn submission_payload_roundtrips_through_json() {
    let params = KdfParams::default();
    assert_eq!(params.iterations, DEFAULT_ITERATIONS);

    let draft = TextData::new("hello", "print('hello')").with_format(Format::Python);
    let sealed = seal_draft(&draft, PASSPHRASE, &params).unwrap();

    // What the API would store and later hand back.
    let body = serde_json::to_value(&sealed).unwrap();
    assert_eq!(body["title"], "hello");
    assert_eq!(body["format"], "python");
    assert!(body["encryptionSalt"].is_string());

    let stored = serde_json::json!({
        "text": {
            "id": 42,
            "title": body["title"],
            "content": body["content"],
            "format": body["format"],
            "expires": "2026-10-17T12:00:00Z",
            "slug": "k3Yx",
            "likes_count": 0,
            "comments": [],
            "encryptionSalt": body["encryptionSalt"],
        }
    });
    let response: TextResponse = serde_json::from_value(stored).unwrap();

    assert_eq!(open_text(&response, PASSPHRASE, &params).unwrap(), "print('hello')");

    let err = open_text(&response, "wrong password", &params).unwrap_err();
    assert!(matches!(err, SealError::Decryption));
    assert!(err.is_recoverable());
}

#[test]
fn mismatched_iteration_count_cannot_open() {
    let draft = TextData::new("t", "content");
    let sealed = seal_draft(&draft, PASSPHRASE, &KdfParams::new(2_000)).unwrap();

    assert!(matches!(
        open_text(&sealed, PASSPHRASE, &KdfParams::new(3_000)),
        Err(SealError::Decryption)
    ));
}
