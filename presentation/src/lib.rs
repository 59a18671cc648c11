//! Presentation layer for the opnVote ballot decoder
//!
//! This crate contains the CLI definition, the deterministic ballot
//! formatter, and the colored console renderer.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleRenderer;
pub use output::formatter::BallotFormatter;
