//! Ballot bounded context
//!
//! Hex input normalization, encryption value objects, and the decoded
//! ballot aggregate.

pub mod decoded;
pub mod hex;
pub mod value_objects;

pub use decoded::DecodedBallot;
pub use hex::{HexString, ValidationError, HEX_PREFIX};
pub use value_objects::{EncryptedVotes, EncryptionKey, EncryptionScheme, Vote, VoteOption};
