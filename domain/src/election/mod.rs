//! Election bounded context
//!
//! The externally published election metadata document.

pub mod description;

pub use description::{ElectionDescription, HeaderImage, Question};
