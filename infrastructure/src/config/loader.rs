//! Configuration file loader with multi-source merging
//!
//! Produces an explicit [`FetcherConfig`] value that gets injected into
//! the IPFS fetcher at construction. Nothing reads the environment after
//! startup.

use crate::ipfs::DEFAULT_IPFS_GATEWAY;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the IPFS metadata fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// Base URL of the IPFS gateway; the CID is appended as-is
    pub gateway: String,
    /// Request timeout in seconds for the single fetch attempt
    pub timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            gateway: DEFAULT_IPFS_GATEWAY.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FetcherConfig {
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = gateway.into();
        self
    }
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `OPNVOTE_`-prefixed environment variables (e.g. `OPNVOTE_GATEWAY`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./opnvote.toml` or `./.opnvote.toml`
    /// 4. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FetcherConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FetcherConfig::default()));

        // Add project-level config files (check both names)
        for filename in &["opnvote.toml", ".opnvote.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        // Add explicit config path
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Environment wins over files
        figment = figment.merge(Env::prefixed("OPNVOTE_"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FetcherConfig {
        FetcherConfig::default()
    }
}
