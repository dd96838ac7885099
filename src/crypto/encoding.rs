//! Binary <-> text transport encoding
//!
//! Standard base64 alphabet with padding and no line wrapping, the same
//! text form browsers produce with `btoa`.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::random::{Salt, SALT_LEN};
use crate::error::{Result, SealError};

pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text. Surrounding whitespace is ignored, anything else
/// outside the alphabet is a validation error.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text.trim())
        .map_err(|e| SealError::Validation(format!("invalid base64: {}", e)))
}

pub fn encode_salt(salt: &Salt) -> String {
    encode(salt.as_bytes())
}

pub fn decode_salt(text: &str) -> Result<Salt> {
    let bytes = decode(text)?;
    let bytes: [u8; SALT_LEN] = bytes.as_slice().try_into().map_err(|_| {
        SealError::Validation(format!(
            "salt must be {} bytes, got {}",
            SALT_LEN,
            bytes.len()
        ))
    })?;
    Ok(Salt::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encode(b"TextBin"), "VGV4dEJpbg==");
        assert_eq!(decode("VGV4dEJpbg==").unwrap(), b"TextBin");
    }

    #[test]
    fn test_no_line_wrapping() {
        let encoded = encode(&[0x5Au8; 512]);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }

    #[test]
    fn test_decode_trims_whitespace() {
        assert_eq!(decode("  VGV4dEJpbg==\n").unwrap(), b"TextBin");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode("not*base64!"), Err(SealError::Validation(_))));
    }

    #[test]
    fn test_salt_roundtrip() {
        let salt = Salt::generate();
        let text = encode_salt(&salt);
        assert_eq!(text.len(), 24);
        assert_eq!(decode_salt(&text).unwrap(), salt);
    }

    #[test]
    fn test_salt_wrong_length() {
        let text = encode(&[1u8; 15]);
        assert!(matches!(decode_salt(&text), Err(SealError::Validation(_))));
    }
}
