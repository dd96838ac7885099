//! textbin-seal - client-side encryption for TextBin snippets
//!
//! This crate provides:
//! - Passphrase-based key derivation (PBKDF2-HMAC-SHA-256)
//! - AES-256-GCM envelopes, base64-encoded for JSON transport
//! - The submission/record payloads the TextBin API exchanges
//! - Sealing a draft before submission and opening a stored text

pub mod config;
pub mod crypto;
pub mod error;
pub mod model;
pub mod snippet;

pub use error::{Result, SealError};
