use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SealError};

/// Largest value the expiry picker offers
pub const MAX_EXPIRY_VALUE: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryUnit {
    Seconds,
    Minutes,
    Hours,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
}

impl ExpiryUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpiryUnit::Seconds => "seconds",
            ExpiryUnit::Minutes => "minutes",
            ExpiryUnit::Hours => "hours",
            ExpiryUnit::Days => "days",
            ExpiryUnit::Weeks => "weeks",
            ExpiryUnit::Months => "months",
            ExpiryUnit::Years => "years",
        }
    }
}

impl fmt::Display for ExpiryUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpiryUnit {
    type Err = SealError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "seconds" => Ok(ExpiryUnit::Seconds),
            "minutes" => Ok(ExpiryUnit::Minutes),
            "hours" => Ok(ExpiryUnit::Hours),
            "days" => Ok(ExpiryUnit::Days),
            "weeks" => Ok(ExpiryUnit::Weeks),
            "months" => Ok(ExpiryUnit::Months),
            "years" => Ok(ExpiryUnit::Years),
            _ => Err(SealError::invalid_field(
                "expiresUnit",
                format!("unknown unit '{}'", s),
            )),
        }
    }
}

/// How long the server keeps a text, e.g. "3 days".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expiry {
    pub unit: ExpiryUnit,
    pub value: u32,
}

impl Expiry {
    pub fn new(value: u32, unit: ExpiryUnit) -> Result<Self> {
        let expiry = Self { unit, value };
        expiry.validate()?;
        Ok(expiry)
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EXPIRY_VALUE).contains(&self.value) {
            return Err(SealError::invalid_field(
                "expiresValue",
                format!("must be between 1 and {}, got {}", MAX_EXPIRY_VALUE, self.value),
            ));
        }
        Ok(())
    }
}

impl Default for Expiry {
    fn default() -> Self {
        Self {
            unit: ExpiryUnit::Days,
            value: 1,
        }
    }
}

impl fmt::Display for Expiry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
