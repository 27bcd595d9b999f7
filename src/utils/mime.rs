//! MIME type constants for HTTP responses.

pub mod types {
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
}
