//! Use cases

pub mod decode_ballot;

pub use decode_ballot::{DecodeBallotError, DecodeBallotInput, DecodeBallotUseCase};
