//! Decryption gateway port
//!
//! Defines the interface to the external vote decryption capability. The
//! decoder treats decryption as opaque: ciphertext + key + scheme in,
//! ordered votes out, or a fatal error.

use async_trait::async_trait;
use opnvote_domain::{EncryptedVotes, EncryptionKey, EncryptionScheme, Vote};
use thiserror::Error;

/// Errors that can occur during vote decryption
///
/// Every variant is fatal to the decode operation; there is no partial
/// result from a failed decryption.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecryptionError {
    #[error("Ciphertext and key carry different encryption schemes")]
    SchemeMismatch,

    #[error("Unsupported encryption scheme: {0}")]
    UnsupportedScheme(EncryptionScheme),

    #[error("Invalid election private key: {0}")]
    InvalidKey(String),

    #[error("Failed to decrypt ballot: {0}")]
    MalformedCiphertext(String),

    #[error("Decryption produced no votes")]
    EmptyPlaintext,
}

/// Gateway for ballot decryption
///
/// Implementations guarantee that on success the returned votes are in the
/// same order they were encoded at cast time. Order is semantically
/// meaningful (it is the correspondence to ballot questions) and must be
/// preserved end-to-end.
#[async_trait]
pub trait DecryptionGateway: Send + Sync {
    /// Decrypt an encrypted ballot into its ordered vote sequence.
    ///
    /// Precondition: `encrypted.scheme`, `key.scheme` and `scheme` agree;
    /// implementations reject a mismatch before touching key material.
    async fn decrypt_votes(
        &self,
        encrypted: &EncryptedVotes,
        key: &EncryptionKey,
        scheme: EncryptionScheme,
    ) -> Result<Vec<Vote>, DecryptionError>;
}
