//! Zeroize-on-drop byte buffer for key material and decrypted content
//!
//! Pages are pinned with `mlock` on Unix (best effort) so secrets stay out
//! of swap, and unpinned again once the bytes have been wiped.

use std::ops::Deref;
use zeroize::Zeroize;

use crate::error::{Result, SealError};

pub struct SecureBytes(Vec<u8>);

impl SecureBytes {
    /// Take ownership of `data`; it is wiped when this value is dropped.
    pub fn new(data: Vec<u8>) -> Self {
        let secure = Self(data);
        secure.lock_memory();
        secure
    }

    /// A zero-filled buffer of `len` bytes, for APIs that write into `&mut [u8]`.
    pub fn zeroed(len: usize) -> Self {
        Self::new(vec![0u8; len])
    }

    #[cfg(unix)]
    fn lock_memory(&self) {
        if self.0.is_empty() {
            return;
        }
        // SAFETY: pointer and length describe the live allocation owned by self.
        unsafe {
            libc::mlock(self.0.as_ptr() as *const libc::c_void, self.0.len());
        }
    }

    #[cfg(unix)]
    fn unlock_memory(&self) {
        if self.0.is_empty() {
            return;
        }
        // SAFETY: same allocation that was passed to mlock.
        unsafe {
            libc::munlock(self.0.as_ptr() as *const libc::c_void, self.0.len());
        }
    }

    #[cfg(not(unix))]
    fn lock_memory(&self) {}

    #[cfg(not(unix))]
    fn unlock_memory(&self) {}

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Interpret the bytes as UTF-8 text.
    ///
    /// The returned `String` is ordinary heap memory owned by the caller;
    /// the protected buffer is wiped either way.
    pub fn into_utf8(self) -> Result<String> {
        let text = std::str::from_utf8(&self.0)
            .map_err(|e| SealError::Validation(format!("decrypted content is not UTF-8: {}", e)))?;
        Ok(text.to_owned())
    }
}

impl Drop for SecureBytes {
    fn drop(&mut self) {
        // Wipe in place first; Vec::zeroize would also reset the length
        // that munlock needs.
        self.0.as_mut_slice().zeroize();
        self.unlock_memory();
    }
}

impl Deref for SecureBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

// Never print secrets
impl std::fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_bytes_deref() {
        let secure = SecureBytes::new(vec![1, 2, 3, 4]);
        assert_eq!(secure.len(), 4);
        assert_eq!(&*secure, &[1, 2, 3, 4]);
    }

    #[test]
    fn test_debug_is_redacted() {
        let secure = SecureBytes::new(b"hunter2".to_vec());
        let printed = format!("{:?}", secure);
        assert!(printed.contains("REDACTED"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn test_zeroed_can_be_written() {
        let mut buf = SecureBytes::zeroed(8);
        buf.as_mut_slice()[0] = 0xAA;
        assert_eq!(buf[0], 0xAA);
        assert_eq!(&buf[1..], &[0u8; 7]);
    }

    #[test]
    fn test_into_utf8() {
        let text = SecureBytes::new("héllo".as_bytes().to_vec()).into_utf8().unwrap();
        assert_eq!(text, "héllo");

        let bad = SecureBytes::new(vec![0xFF, 0xFE]).into_utf8();
        assert!(matches!(bad, Err(SealError::Validation(_))));
    }

    #[test]
    fn test_empty_buffer() {
        let secure = SecureBytes::new(Vec::new());
        assert!(secure.is_empty());
    }
}
