//! Output formatting

pub mod console;
pub mod formatter;

pub use console::ConsoleRenderer;
pub use formatter::BallotFormatter;
