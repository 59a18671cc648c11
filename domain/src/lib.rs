//! Domain layer for the opnVote ballot decoder
//!
//! This crate contains the core value objects of the decode pipeline.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Ballot
//!
//! An encrypted ballot is a hex-encoded ciphertext produced by the opnVote
//! voting system. Decrypting it with the election private key yields the
//! ordered sequence of [`Vote`]s the voter cast.
//!
//! ## Election description
//!
//! Elections publish a JSON metadata document (title, questions, timing)
//! on IPFS. The document schema is open: the publisher evolves it
//! independently, so unknown fields are preserved rather than rejected.

pub mod ballot;
pub mod election;

// Re-export commonly used types
pub use ballot::{
    decoded::DecodedBallot,
    hex::{HexString, ValidationError, HEX_PREFIX},
    value_objects::{EncryptedVotes, EncryptionKey, EncryptionScheme, Vote, VoteOption},
};
pub use election::description::{ElectionDescription, HeaderImage, Question};
