//! RSA decryption gateway
//!
//! Implements the [`DecryptionGateway`] port for the single scheme the
//! protocol supports today. Key material is DER (PKCS#8 or PKCS#1),
//! ciphertext is PKCS#1 v1.5. The decrypted plaintext carries the vote
//! ordinals in cast order, one byte per vote.

use async_trait::async_trait;
use opnvote_application::ports::decryption_gateway::{DecryptionError, DecryptionGateway};
use opnvote_domain::{EncryptedVotes, EncryptionKey, EncryptionScheme, Vote};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use tracing::debug;

/// Decrypts ballots with an RSA election private key
#[derive(Debug, Default)]
pub struct RsaDecryptionGateway;

impl RsaDecryptionGateway {
    pub fn new() -> Self {
        Self
    }

    fn parse_private_key(der: &[u8]) -> Result<RsaPrivateKey, DecryptionError> {
        // Try PKCS#8 first, fall back to the bare PKCS#1 structure
        match RsaPrivateKey::from_pkcs8_der(der) {
            Ok(key) => Ok(key),
            Err(_) => RsaPrivateKey::from_pkcs1_der(der)
                .map_err(|e| DecryptionError::InvalidKey(e.to_string())),
        }
    }
}

#[async_trait]
impl DecryptionGateway for RsaDecryptionGateway {
    async fn decrypt_votes(
        &self,
        encrypted: &EncryptedVotes,
        key: &EncryptionKey,
        scheme: EncryptionScheme,
    ) -> Result<Vec<Vote>, DecryptionError> {
        if encrypted.scheme != scheme || key.scheme != scheme {
            return Err(DecryptionError::SchemeMismatch);
        }
        match scheme {
            EncryptionScheme::Rsa => {}
            other => return Err(DecryptionError::UnsupportedScheme(other)),
        }

        let private_key = Self::parse_private_key(&key.hex.to_bytes())?;

        let plaintext = private_key
            .decrypt(Pkcs1v15Encrypt, &encrypted.hex.to_bytes())
            .map_err(|e| DecryptionError::MalformedCiphertext(e.to_string()))?;

        if plaintext.is_empty() {
            return Err(DecryptionError::EmptyPlaintext);
        }

        debug!("Decrypted {} vote ordinals", plaintext.len());
        Ok(plaintext.into_iter().map(Vote::new).collect())
    }
}
