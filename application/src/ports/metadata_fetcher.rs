//! Election metadata fetcher port
//!
//! Defines the interface for retrieving an election description document
//! by content identifier. Inside the decode use case these errors are
//! non-fatal; callers using a fetcher directly see them as-is.

use async_trait::async_trait;
use opnvote_domain::ElectionDescription;
use thiserror::Error;

/// Errors that can occur while fetching an election description
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetadataError {
    #[error("IPFS fetch failed: {0}")]
    Transport(String),

    #[error("IPFS fetch failed: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Malformed election description: {0}")]
    MalformedDocument(String),

    #[error("Failed to build fetch client: {0}")]
    Client(String),
}

/// Fetcher for externally published election descriptions
#[async_trait]
pub trait MetadataFetcher: Send + Sync {
    /// Fetch the election description for `cid`.
    ///
    /// One attempt per call: no retries, no caching. Retry policy belongs
    /// to the caller.
    async fn fetch(&self, cid: &str) -> Result<ElectionDescription, MetadataError>;
}
