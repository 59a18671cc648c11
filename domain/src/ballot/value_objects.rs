//! Encryption and vote value objects

use crate::ballot::hex::HexString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encryption scheme used for a ballot (Value Object)
///
/// RSA is the only scheme the protocol supports today. The enumeration is
/// `non_exhaustive` so new schemes can be added without breaking callers.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EncryptionScheme {
    Rsa,
}

impl EncryptionScheme {
    /// Get the string identifier for this scheme
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionScheme::Rsa => "RSA",
        }
    }
}

impl fmt::Display for EncryptionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encrypted votes: ciphertext plus the scheme that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedVotes {
    pub hex: HexString,
    pub scheme: EncryptionScheme,
}

impl EncryptedVotes {
    pub fn new(hex: HexString, scheme: EncryptionScheme) -> Self {
        Self { hex, scheme }
    }
}

/// An election key: key material plus the scheme it belongs to
///
/// Structurally identical to [`EncryptedVotes`]; kept as a separate type
/// so ciphertext and key material cannot be swapped at a call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionKey {
    pub hex: HexString,
    pub scheme: EncryptionScheme,
}

impl EncryptionKey {
    pub fn new(hex: HexString, scheme: EncryptionScheme) -> Self {
        Self { hex, scheme }
    }
}

/// The closed set of selections a voter can make on a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteOption {
    NoVote,
    Yes,
    No,
    Abstain,
}

impl VoteOption {
    /// Map a raw ordinal to its option, if it is a known one
    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(VoteOption::NoVote),
            1 => Some(VoteOption::Yes),
            2 => Some(VoteOption::No),
            3 => Some(VoteOption::Abstain),
            _ => None,
        }
    }

    /// Human-readable name of this option
    pub fn name(&self) -> &'static str {
        match self {
            VoteOption::NoVote => "NoVote",
            VoteOption::Yes => "Yes",
            VoteOption::No => "No",
            VoteOption::Abstain => "Abstain",
        }
    }
}

impl fmt::Display for VoteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decrypted vote (Value Object)
///
/// Carries only its raw ordinal; position in the decrypted sequence is its
/// sole identity. The ordinal may be outside the known [`VoteOption`]
/// range when decoder and encoder disagree on protocol version, so the raw
/// value is always preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub value: u8,
}

impl Vote {
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// The named option this ordinal maps to, if known
    pub fn option(&self) -> Option<VoteOption> {
        VoteOption::from_ordinal(self.value)
    }
}
