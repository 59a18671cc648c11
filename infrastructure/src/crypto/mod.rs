//! Ballot decryption adapters

pub mod rsa_gateway;

pub use rsa_gateway::RsaDecryptionGateway;
