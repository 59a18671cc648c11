//! Port definitions
//!
//! Ports are the interfaces through which the decode use case reaches the
//! outside world. Implementations (adapters) live in the infrastructure
//! layer.

pub mod decryption_gateway;
pub mod metadata_fetcher;

pub use decryption_gateway::{DecryptionError, DecryptionGateway};
pub use metadata_fetcher::{MetadataError, MetadataFetcher};
