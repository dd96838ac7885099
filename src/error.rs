use thiserror::Error;

pub type Result<T> = std::result::Result<T, SealError>;

#[derive(Debug, Error)]
pub enum SealError {
    /// Malformed input caught before the cipher ever runs.
    #[error("Invalid envelope: {0}")]
    Validation(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Tag verification failed. Almost always a mistyped passphrase.
    #[error("Decryption failed: wrong password or corrupted data")]
    Decryption,

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SealError {
    /// True only for a failed tag check, where asking for another
    /// passphrase is the right response.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SealError::Decryption)
    }

    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        SealError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
