//! Deployment settings

use serde::{Deserialize, Serialize};

use crate::crypto::{KdfParams, DEFAULT_ITERATIONS};
use crate::error::{Result, SealError};
use crate::model::{Expiry, Format};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// PBKDF2 rounds. Every client of a deployment must agree on this;
    /// it is not stored next to the salt.
    pub kdf_iterations: u32,
    /// Format used by `seal` when none is given
    pub default_format: Format,
    /// Expiry used by `seal` when none is given
    pub default_expiry: Expiry,
    /// Shortest passphrase the CLI accepts (0 = no check)
    pub min_passphrase_len: usize,
}

impl Settings {
    pub fn kdf_params(&self) -> KdfParams {
        KdfParams::new(self.kdf_iterations)
    }

    /// Any other count, higher or lower, breaks interop with other clients.
    pub fn iterations_differ_from_default(&self) -> bool {
        self.kdf_iterations != DEFAULT_ITERATIONS
    }

    pub fn validate(&self) -> Result<()> {
        if self.kdf_iterations == 0 {
            return Err(SealError::InvalidConfig(
                "kdf_iterations must be at least 1".into(),
            ));
        }
        if self.iterations_differ_from_default() {
            tracing::warn!(
                iterations = self.kdf_iterations,
                "kdf_iterations differs from the TextBin default; content sealed here will not open in other clients"
            );
        }
        self.default_expiry
            .validate()
            .map_err(|e| SealError::InvalidConfig(format!("default_expiry: {}", e)))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kdf_iterations: DEFAULT_ITERATIONS,
            default_format: Format::default(),
            default_expiry: Expiry::default(),
            min_passphrase_len: 0,
        }
    }
}
