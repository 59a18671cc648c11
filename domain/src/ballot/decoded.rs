//! The decoded ballot aggregate

use crate::ballot::value_objects::Vote;
use crate::election::description::ElectionDescription;
use serde::{Deserialize, Serialize};

/// Result of decoding one encrypted ballot
///
/// `votes` is always present, in the order the votes were encoded at cast
/// time. The election description is attached only when it was both
/// requested and successfully retrieved; metadata enrichment failing never
/// removes the votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecodedBallot {
    pub votes: Vec<Vote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub election_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub election_description: Option<ElectionDescription>,
}

impl DecodedBallot {
    pub fn new(votes: Vec<Vote>) -> Self {
        Self {
            votes,
            election_id: None,
            voter_address: None,
            election_description: None,
        }
    }

    /// Attach a successfully retrieved election description
    pub fn with_election_description(mut self, description: ElectionDescription) -> Self {
        self.election_description = Some(description);
        self
    }

    pub fn with_election_id(mut self, id: u64) -> Self {
        self.election_id = Some(id);
        self
    }

    pub fn with_voter_address(mut self, address: impl Into<String>) -> Self {
        self.voter_address = Some(address.into());
        self
    }
}
