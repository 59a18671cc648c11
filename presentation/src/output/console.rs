//! Console renderer for decoded ballots
//!
//! Composes the full success report for the terminal. Section headers are
//! colored; the body text comes from [`BallotFormatter`] unchanged.

use crate::output::formatter::BallotFormatter;
use chrono::TimeZone;
use colored::Colorize;
use opnvote_domain::DecodedBallot;
use std::fmt;

/// Renders decoded ballots for console display
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Render the full decode report.
    ///
    /// The election information section appears only when a description
    /// was attached to the ballot.
    pub fn render<Tz: TimeZone>(ballot: &DecodedBallot, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "Ballot decoded successfully".green()));

        if let Some(description) = &ballot.election_description {
            output.push_str(&format!("{}\n", "Election Information:".cyan().bold()));
            output.push_str(&format!("{}\n", "=====================".cyan()));
            output.push_str(&BallotFormatter::format_election_description(
                description,
                tz,
            ));
            output.push_str("\n\n");
        }

        output.push_str(&format!("{}\n", "Votes:".cyan().bold()));
        output.push_str(&BallotFormatter::format_votes(&ballot.votes));
        output.push('\n');

        output
    }
}
