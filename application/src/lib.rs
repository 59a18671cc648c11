//! Application layer for the opnVote ballot decoder
//!
//! This crate contains the decode use case and the port definitions its
//! adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    decryption_gateway::{DecryptionError, DecryptionGateway},
    metadata_fetcher::{MetadataError, MetadataFetcher},
};
pub use use_cases::decode_ballot::{DecodeBallotError, DecodeBallotInput, DecodeBallotUseCase};
