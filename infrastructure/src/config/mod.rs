//! Configuration loading

pub mod loader;

pub use loader::{ConfigLoader, FetcherConfig};
