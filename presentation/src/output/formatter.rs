//! Deterministic ballot formatter
//!
//! Plain-text rendering of decoded votes and election descriptions.
//! Output is byte-identical for identical input: the timezone used for
//! registration windows is an explicit argument, not a hidden global.

use chrono::TimeZone;
use opnvote_domain::{ElectionDescription, Vote};
use std::fmt;

/// Formats decoded ballots for display
pub struct BallotFormatter;

impl BallotFormatter {
    /// Format votes, one line per vote with 1-based index.
    ///
    /// Both the option name and the raw ordinal are printed, so consumers
    /// missing the latest option names still see the value:
    /// `  Vote 1: Yes (1)`.
    pub fn format_votes(votes: &[Vote]) -> String {
        votes
            .iter()
            .enumerate()
            .map(|(index, vote)| {
                let name = vote.option().map(|o| o.name()).unwrap_or("Unknown");
                format!("  Vote {}: {} ({})", index + 1, name, vote.value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format an election description, present fields only, in a fixed
    /// order.
    ///
    /// The registration window is rendered in the supplied timezone and
    /// only when both bounds are present. Absent optional fields are
    /// omitted entirely, never rendered as empty placeholders.
    pub fn format_election_description<Tz: TimeZone>(
        description: &ElectionDescription,
        tz: &Tz,
    ) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let mut lines: Vec<String> = Vec::new();

        lines.push(format!("Title: {}", description.title));

        if let Some(summary) = &description.summary {
            lines.push(format!("Summary: {}", summary));
        }

        if let Some(text) = &description.description {
            lines.push(format!("Description: {}", text));
        }

        if let Some(url) = description
            .header_image
            .as_ref()
            .and_then(|image| image.large.as_ref())
        {
            lines.push(format!("Header Image: {}", url));
        }

        if let (Some(start), Some(end)) = (
            description.registration_start_time,
            description.registration_end_time,
        ) {
            if let (Some(start), Some(end)) = (
                tz.timestamp_opt(start, 0).single(),
                tz.timestamp_opt(end, 0).single(),
            ) {
                lines.push(format!(
                    "Registration Period: {} - {}",
                    start.format("%Y-%m-%d %H:%M:%S"),
                    end.format("%Y-%m-%d %H:%M:%S")
                ));
            }
        }

        if !description.questions.is_empty() {
            lines.push(String::new());
            lines.push("Questions:".to_string());
            for (index, question) in description.questions.iter().enumerate() {
                lines.push(format!("  {}. {}", index + 1, question.text));
                if let Some(url) = &question.image_url {
                    lines.push(format!("     Image: {}", url));
                }
            }
        }

        if let Some(link) = &description.back_link {
            lines.push(String::new());
            lines.push(format!("Back Link: {}", link));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use opnvote_domain::{HeaderImage, Question};

    fn two_question_description() -> ElectionDescription {
        let mut description = ElectionDescription::with_title("Election X");
        description.questions = vec![
            Question::new("Question one?").with_image_url("https://img/q1.png"),
            Question::new("Question two?"),
        ];
        description
    }

    #[test]
    fn test_format_votes_names_and_ordinals() {
        let votes = vec![Vote::new(1), Vote::new(2), Vote::new(0)];
        assert_eq!(
            BallotFormatter::format_votes(&votes),
            "  Vote 1: Yes (1)\n  Vote 2: No (2)\n  Vote 3: NoVote (0)"
        );
    }

    #[test]
    fn test_format_votes_unknown_ordinal_keeps_raw_value() {
        let votes = vec![Vote::new(42)];
        assert_eq!(
            BallotFormatter::format_votes(&votes),
            "  Vote 1: Unknown (42)"
        );
    }

    #[test]
    fn test_format_votes_empty_sequence() {
        assert_eq!(BallotFormatter::format_votes(&[]), "");
    }

    #[test]
    fn test_description_starts_with_title_then_questions() {
        let output =
            BallotFormatter::format_election_description(&two_question_description(), &Utc);
        assert_eq!(
            output,
            "Title: Election X\n\nQuestions:\n  1. Question one?\n     Image: https://img/q1.png\n  2. Question two?"
        );
    }

    #[test]
    fn test_description_full_field_order() {
        let mut description = two_question_description();
        description.summary = Some("Short summary".to_string());
        description.description = Some("Long description".to_string());
        description.header_image = Some(HeaderImage {
            large: Some("https://img/large.png".to_string()),
            ..Default::default()
        });
        description.registration_start_time = Some(1700000000);
        description.registration_end_time = Some(1700100000);
        description.back_link = Some("https://vote.example".to_string());

        let output = BallotFormatter::format_election_description(&description, &Utc);
        let expected = "\
Title: Election X
Summary: Short summary
Description: Long description
Header Image: https://img/large.png
Registration Period: 2023-11-14 22:13:20 - 2023-11-16 02:00:00

Questions:
  1. Question one?
     Image: https://img/q1.png
  2. Question two?

Back Link: https://vote.example";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_registration_window_needs_both_bounds() {
        let mut description = ElectionDescription::with_title("Election X");
        description.registration_start_time = Some(1700000000);

        let output = BallotFormatter::format_election_description(&description, &Utc);
        assert_eq!(output, "Title: Election X");
    }

    #[test]
    fn test_absent_fields_are_omitted_not_blank() {
        let description = ElectionDescription::with_title("Election X");
        let output = BallotFormatter::format_election_description(&description, &Utc);
        assert_eq!(output, "Title: Election X");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let description = two_question_description();
        let first = BallotFormatter::format_election_description(&description, &Utc);
        let second = BallotFormatter::format_election_description(&description, &Utc);
        assert_eq!(first, second);

        let votes = vec![Vote::new(1), Vote::new(3)];
        assert_eq!(
            BallotFormatter::format_votes(&votes),
            BallotFormatter::format_votes(&votes)
        );
    }
}
