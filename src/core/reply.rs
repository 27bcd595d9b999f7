//! Transport-independent response value.
//!
//! Endpoint handlers return a `Reply`; `serve` sends it over HTTP and `build`
//! writes successful bodies to disk.

use crate::utils::mime::types::{JSON, PLAIN, XML};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, content_type: &'static str, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type,
            body: body.into(),
        }
    }

    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self::new(status, PLAIN, body)
    }

    pub fn xml(body: impl Into<String>) -> Self {
        Self::new(200, XML, body)
    }

    pub fn json(status: u16, value: &serde_json::Value) -> Self {
        Self::new(status, JSON, value.to_string())
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
