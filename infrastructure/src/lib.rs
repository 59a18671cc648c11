//! Infrastructure layer for the opnVote ballot decoder
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod crypto;
pub mod ipfs;

// Re-export commonly used types
pub use config::{ConfigLoader, FetcherConfig};
pub use crypto::RsaDecryptionGateway;
pub use ipfs::{IpfsMetadataFetcher, DEFAULT_IPFS_GATEWAY};
