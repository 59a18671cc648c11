//! Election description document (open schema)
//!
//! The description is published on IPFS by the election organizer and the
//! schema evolves independently of this decoder. Each struct therefore
//! carries an explicit `extra` side-map: unknown fields are captured there
//! and survive round-tripping instead of being rejected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Header image URLs for an election
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,
    /// Unrecognized fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single ballot question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Unrecognized fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image_url: None,
            extra: Map::new(),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Election metadata document
///
/// Only `title` is required; everything else is optional and omitted from
/// rendering when absent. Question order matches the order votes were
/// encoded in, by convention of the publisher (not validated here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionDescription {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image: Option<HeaderImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_link: Option<String>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_start_time: Option<i64>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_end_time: Option<i64>,
    /// Unrecognized fields, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ElectionDescription {
    /// Create a description with only the required title set
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            header_image: None,
            description: None,
            summary: None,
            questions: Vec::new(),
            back_link: None,
            registration_start_time: None,
            registration_end_time: None,
            extra: Map::new(),
        }
    }
}
