//! IPFS gateway adapter

pub mod fetcher;

pub use fetcher::{IpfsMetadataFetcher, DEFAULT_IPFS_GATEWAY};
