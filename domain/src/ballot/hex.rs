//! Hex input normalization and validation
//!
//! Ciphertext and key material arrive as user-supplied hex strings. This
//! module canonicalizes them (trimmed, lowercase, `0x`-prefixed) and
//! rejects anything that does not decode to a non-empty byte sequence.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Canonical prefix for hex strings
pub const HEX_PREFIX: &str = "0x";

/// Validation errors for hex input
///
/// Every variant names the field it applies to, so callers can report
/// which of their inputs (ciphertext, key) was invalid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: String },

    #[error("{field} is not a valid hex string")]
    InvalidHex { field: String },

    #[error("{field} must contain an even number of hex digits")]
    OddLength { field: String },
}

impl ValidationError {
    /// The field label this error was raised for
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Empty { field }
            | ValidationError::InvalidHex { field }
            | ValidationError::OddLength { field } => field,
        }
    }
}

/// A validated, canonical hex string (Value Object)
///
/// Canonical form is lowercase, `0x`-prefixed, with no surrounding or
/// internal whitespace. Construction goes through [`HexString::normalize`],
/// so every instance decodes to a non-empty byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexString(String);

impl HexString {
    /// Normalize and validate raw hex input.
    ///
    /// Trims surrounding whitespace, strips an optional `0x`/`0X` prefix,
    /// lowercases the digits, and re-adds the canonical prefix. The digits
    /// must be valid hex and even in count.
    ///
    /// `field` names the input for error messages (e.g. "Encrypted votes").
    pub fn normalize(input: &str, field: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: field.to_string(),
            });
        }

        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed)
            .to_ascii_lowercase();

        if digits.is_empty() {
            return Err(ValidationError::Empty {
                field: field.to_string(),
            });
        }

        // hex::decode doubles as the digit validator
        match hex::decode(&digits) {
            Ok(_) => Ok(HexString(format!("{}{}", HEX_PREFIX, digits))),
            Err(hex::FromHexError::OddLength) => Err(ValidationError::OddLength {
                field: field.to_string(),
            }),
            Err(_) => Err(ValidationError::InvalidHex {
                field: field.to_string(),
            }),
        }
    }

    /// The canonical string form (`0x`-prefixed, lowercase)
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The hex digits without the canonical prefix
    pub fn digits(&self) -> &str {
        &self.0[HEX_PREFIX.len()..]
    }

    /// Decode the digits into bytes.
    ///
    /// Infallible by construction: validation already decoded them once.
    pub fn to_bytes(&self) -> Vec<u8> {
        hex::decode(self.digits()).unwrap_or_default()
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
