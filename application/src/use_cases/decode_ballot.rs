//! Decode ballot use case.
//!
//! Orchestrates the decode pipeline: hex normalization, decryption, and
//! best-effort metadata enrichment.
//!
//! The failure semantics are deliberately asymmetric. Validation and
//! decryption errors abort the whole operation: a vote tally must never be
//! silently degraded. A metadata fetch failure is caught exactly here,
//! logged as a warning, and the operation continues — enrichment must
//! never prevent a voter from seeing their decoded votes.

use crate::ports::decryption_gateway::{DecryptionError, DecryptionGateway};
use crate::ports::metadata_fetcher::MetadataFetcher;
use opnvote_domain::{
    DecodedBallot, EncryptedVotes, EncryptionKey, EncryptionScheme, HexString, ValidationError,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Field labels used in validation error messages
const ENCRYPTED_VOTES_FIELD: &str = "Encrypted votes";
const PRIVATE_KEY_FIELD: &str = "Election private key";

/// Errors that can occur during ballot decoding
///
/// Metadata fetch failures never appear here; they are swallowed inside
/// the use case.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeBallotError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decryption(#[from] DecryptionError),
}

/// Input for the [`DecodeBallotUseCase`]
#[derive(Debug, Clone)]
pub struct DecodeBallotInput {
    /// Encrypted votes as a hex string
    pub encrypted_votes_hex: String,
    /// Election private key as a hex string
    pub private_key_hex: String,
    /// Optional IPFS CID of the election description
    pub description_cid: Option<String>,
}

impl DecodeBallotInput {
    pub fn new(
        encrypted_votes_hex: impl Into<String>,
        private_key_hex: impl Into<String>,
    ) -> Self {
        Self {
            encrypted_votes_hex: encrypted_votes_hex.into(),
            private_key_hex: private_key_hex.into(),
            description_cid: None,
        }
    }

    pub fn with_description_cid(mut self, cid: impl Into<String>) -> Self {
        self.description_cid = Some(cid.into());
        self
    }
}

/// Use case for decoding an encrypted ballot
///
/// Executes a linear pipeline:
/// 1. Normalize ciphertext and key hex (fatal on failure)
/// 2. Decrypt via the [`DecryptionGateway`] (fatal on failure)
/// 3. Fetch the election description if a CID was supplied (best-effort)
pub struct DecodeBallotUseCase {
    gateway: Arc<dyn DecryptionGateway>,
    fetcher: Arc<dyn MetadataFetcher>,
}

impl DecodeBallotUseCase {
    pub fn new(gateway: Arc<dyn DecryptionGateway>, fetcher: Arc<dyn MetadataFetcher>) -> Self {
        Self { gateway, fetcher }
    }

    /// Execute the decode pipeline.
    pub async fn execute(
        &self,
        input: DecodeBallotInput,
    ) -> Result<DecodedBallot, DecodeBallotError> {
        let ciphertext = HexString::normalize(&input.encrypted_votes_hex, ENCRYPTED_VOTES_FIELD)?;
        let key_hex = HexString::normalize(&input.private_key_hex, PRIVATE_KEY_FIELD)?;

        let scheme = EncryptionScheme::Rsa;
        let encrypted = EncryptedVotes::new(ciphertext, scheme);
        let key = EncryptionKey::new(key_hex, scheme);

        // Mandatory critical path: any failure here aborts the operation
        let votes = self.gateway.decrypt_votes(&encrypted, &key, scheme).await?;
        info!("Decrypted {} votes", votes.len());

        let mut ballot = DecodedBallot::new(votes);

        if let Some(cid) = input
            .description_cid
            .as_deref()
            .map(str::trim)
            .filter(|cid| !cid.is_empty())
        {
            debug!("Fetching election description for CID {}", cid);
            match self.fetcher.fetch(cid).await {
                Ok(description) => {
                    ballot = ballot.with_election_description(description);
                }
                Err(e) => {
                    // Best-effort enrichment: swallowed, never propagated
                    warn!("Failed to fetch election description: {}", e);
                }
            }
        }

        Ok(ballot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::metadata_fetcher::MetadataError;
    use async_trait::async_trait;
    use opnvote_domain::{ElectionDescription, Vote};
    use std::sync::atomic::{AtomicBool, Ordering};

    // ==================== Test Mocks ====================

    struct MockGateway {
        result: Result<Vec<Vote>, DecryptionError>,
    }

    impl MockGateway {
        fn votes(ordinals: &[u8]) -> Self {
            Self {
                result: Ok(ordinals.iter().copied().map(Vote::new).collect()),
            }
        }

        fn failing(error: DecryptionError) -> Self {
            Self { result: Err(error) }
        }
    }

    #[async_trait]
    impl DecryptionGateway for MockGateway {
        async fn decrypt_votes(
            &self,
            encrypted: &EncryptedVotes,
            key: &EncryptionKey,
            scheme: EncryptionScheme,
        ) -> Result<Vec<Vote>, DecryptionError> {
            // The use case must hand over canonical inputs with one scheme
            assert_eq!(encrypted.scheme, scheme);
            assert_eq!(key.scheme, scheme);
            self.result.clone()
        }
    }

    struct MockFetcher {
        result: Result<ElectionDescription, MetadataError>,
        called: AtomicBool,
    }

    impl MockFetcher {
        fn returning(result: Result<ElectionDescription, MetadataError>) -> Self {
            Self {
                result,
                called: AtomicBool::new(false),
            }
        }

        fn was_called(&self) -> bool {
            self.called.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MetadataFetcher for MockFetcher {
        async fn fetch(&self, _cid: &str) -> Result<ElectionDescription, MetadataError> {
            self.called.store(true, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn use_case(
        gateway: MockGateway,
        fetcher: Arc<MockFetcher>,
    ) -> DecodeBallotUseCase {
        DecodeBallotUseCase::new(Arc::new(gateway), fetcher)
    }

    fn unused_fetcher() -> Arc<MockFetcher> {
        Arc::new(MockFetcher::returning(Err(MetadataError::Transport(
            "should not be called".to_string(),
        ))))
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_decode_without_cid_skips_fetch() {
        let fetcher = unused_fetcher();
        let use_case = use_case(MockGateway::votes(&[1, 2, 0]), fetcher.clone());

        let ballot = use_case
            .execute(DecodeBallotInput::new("abcd", "0102"))
            .await
            .unwrap();

        assert_eq!(ballot.votes, vec![Vote::new(1), Vote::new(2), Vote::new(0)]);
        assert!(ballot.election_description.is_none());
        assert!(!fetcher.was_called());
    }

    #[tokio::test]
    async fn test_decode_preserves_vote_order() {
        let ordinals = [3, 0, 2, 2, 1, 0, 3];
        let use_case = use_case(MockGateway::votes(&ordinals), unused_fetcher());

        let ballot = use_case
            .execute(DecodeBallotInput::new("abcd", "0102"))
            .await
            .unwrap();

        let expected: Vec<Vote> = ordinals.iter().copied().map(Vote::new).collect();
        assert_eq!(ballot.votes, expected);
    }

    #[tokio::test]
    async fn test_decode_attaches_fetched_description() {
        let description = ElectionDescription::with_title("Election X");
        let fetcher = Arc::new(MockFetcher::returning(Ok(description)));
        let use_case = use_case(MockGateway::votes(&[1]), fetcher.clone());

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("QmTest");
        let ballot = use_case.execute(input).await.unwrap();

        assert!(fetcher.was_called());
        assert_eq!(ballot.election_description.unwrap().title, "Election X");
    }

    #[tokio::test]
    async fn test_fetch_404_is_swallowed() {
        let fetcher = Arc::new(MockFetcher::returning(Err(MetadataError::Status {
            status: 404,
            reason: "Not Found".to_string(),
        })));
        let use_case = use_case(MockGateway::votes(&[1, 2]), fetcher.clone());

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("QmMissing");
        let ballot = use_case.execute(input).await.unwrap();

        assert!(fetcher.was_called());
        assert_eq!(ballot.votes, vec![Vote::new(1), Vote::new(2)]);
        assert!(ballot.election_description.is_none());
    }

    #[tokio::test]
    async fn test_fetch_malformed_document_is_swallowed() {
        let fetcher = Arc::new(MockFetcher::returning(Err(
            MetadataError::MalformedDocument("missing field `title`".to_string()),
        )));
        let use_case = use_case(MockGateway::votes(&[1]), fetcher);

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("QmBad");
        let ballot = use_case.execute(input).await.unwrap();

        assert_eq!(ballot.votes, vec![Vote::new(1)]);
        assert!(ballot.election_description.is_none());
    }

    #[tokio::test]
    async fn test_fetch_transport_error_is_swallowed() {
        let fetcher = Arc::new(MockFetcher::returning(Err(MetadataError::Transport(
            "connection refused".to_string(),
        ))));
        let use_case = use_case(MockGateway::votes(&[1]), fetcher);

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("QmDown");
        let ballot = use_case.execute(input).await.unwrap();

        assert!(ballot.election_description.is_none());
    }

    #[tokio::test]
    async fn test_blank_cid_skips_fetch() {
        let fetcher = unused_fetcher();
        let use_case = use_case(MockGateway::votes(&[1]), fetcher.clone());

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("   ");
        let ballot = use_case.execute(input).await.unwrap();

        assert!(!fetcher.was_called());
        assert!(ballot.election_description.is_none());
    }

    #[tokio::test]
    async fn test_decryption_failure_aborts_before_fetch() {
        let fetcher = unused_fetcher();
        let use_case = use_case(
            MockGateway::failing(DecryptionError::MalformedCiphertext(
                "decryption error".to_string(),
            )),
            fetcher.clone(),
        );

        let input = DecodeBallotInput::new("abcd", "0102").with_description_cid("QmTest");
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(err, DecodeBallotError::Decryption(_)));
        assert!(!fetcher.was_called());
    }

    #[tokio::test]
    async fn test_empty_ciphertext_is_validation_error() {
        let use_case = use_case(MockGateway::votes(&[1]), unused_fetcher());

        let err = use_case
            .execute(DecodeBallotInput::new("", "0102"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Encrypted votes cannot be empty");
    }

    #[tokio::test]
    async fn test_invalid_key_hex_names_key_field() {
        let use_case = use_case(MockGateway::votes(&[1]), unused_fetcher());

        let err = use_case
            .execute(DecodeBallotInput::new("abcd", "abcZZ"))
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Election private key is not a valid hex string"
        );
    }
}
