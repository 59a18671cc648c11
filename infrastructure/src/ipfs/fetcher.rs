//! IPFS metadata fetcher: retrieve an election description by CID
//!
//! Implements [`MetadataFetcher`] with a single HTTP GET against a
//! configurable gateway. One attempt per call, bounded by the request
//! timeout from [`FetcherConfig`]; retry policy belongs to the caller.

use crate::config::FetcherConfig;
use async_trait::async_trait;
use opnvote_application::ports::metadata_fetcher::{MetadataError, MetadataFetcher};
use opnvote_domain::ElectionDescription;
use std::time::Duration;
use tracing::debug;

/// Well-known public IPFS gateway used when none is configured
pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io/ipfs/";

/// Fetches election descriptions from an IPFS gateway
pub struct IpfsMetadataFetcher {
    client: reqwest::Client,
    gateway: String,
}

impl IpfsMetadataFetcher {
    /// Create a fetcher for the configured gateway.
    pub fn new(config: FetcherConfig) -> Result<Self, MetadataError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MetadataError::Client(e.to_string()))?;

        Ok(Self {
            client,
            gateway: config.gateway,
        })
    }

    /// Build the retrieval URL for a CID.
    ///
    /// The gateway base is concatenated with the CID as-is; gateways that
    /// need a trailing slash must be configured with one.
    fn resolve_url(&self, cid: &str) -> String {
        format!("{}{}", self.gateway, cid)
    }
}

#[async_trait]
impl MetadataFetcher for IpfsMetadataFetcher {
    async fn fetch(&self, cid: &str) -> Result<ElectionDescription, MetadataError> {
        let url = self.resolve_url(cid);
        debug!("Fetching election description from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MetadataError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MetadataError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| MetadataError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| MetadataError::MalformedDocument(e.to_string()))
    }
}
