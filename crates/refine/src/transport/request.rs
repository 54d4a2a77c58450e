//! Transport trait and response type.

use indexmap::IndexMap;

use crate::error::Result;

use super::multipart::MultipartBody;

/// Ordered request parameters (query string or form body).
pub type Params = IndexMap<String, String>;

/// What the client needs from an HTTP response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Value of the `Location` header, if any.
    pub location: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Create a response with a body and no headers.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            location: None,
            body: body.into(),
        }
    }

    /// Attach a `Location` header.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Trait for HTTP transports.
///
/// Implementations must be thread-safe (Send + Sync) and must not follow
/// redirects: project creation reads the `Location` header of the
/// redirect itself. Transport failures are returned as-is; the client
/// never retries.
pub trait Transport: Send + Sync {
    /// Issue a GET with `query` appended to the URL.
    fn get(&self, url: &str, query: &Params) -> Result<HttpResponse>;

    /// Issue a POST with `form` as an urlencoded body.
    fn post_form(&self, url: &str, form: &Params) -> Result<HttpResponse>;

    /// Issue a POST with a prebuilt multipart body.
    fn post_multipart(&self, url: &str, body: MultipartBody) -> Result<HttpResponse>;

    /// Get the name of this transport (for logging/debugging).
    fn name(&self) -> &str;
}
