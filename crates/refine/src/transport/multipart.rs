//! Multipart form bodies for project upload.
//!
//! The body is assembled by hand so the boundary can be chosen by the
//! client and announced in the `Content-Type` header.

use chrono::{SecondsFormat, Utc};
use sha2::{Digest, Sha256};

/// Generate a multipart boundary from the current time.
///
/// Collisions are possible but harmless here: the boundary only has to be
/// absent from the uploaded file.
pub fn create_boundary() -> String {
    let mut hasher = Sha256::new();
    hasher.update(Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// A `multipart/form-data` body and its boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary: String,
    bytes: Vec<u8>,
}

impl MultipartBody {
    /// Start an empty body with a freshly generated boundary.
    pub fn new() -> Self {
        Self::with_boundary(create_boundary())
    }

    /// Start an empty body with a fixed boundary.
    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        Self {
            boundary: boundary.into(),
            bytes: Vec::new(),
        }
    }

    /// Append a plain text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.open_part();
        self.bytes.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        self.bytes.extend_from_slice(value.as_bytes());
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    /// Append a file field.
    pub fn file(mut self, name: &str, filename: &str, content: &[u8]) -> Self {
        self.open_part();
        self.bytes.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                name,
                escape_filename(filename)
            )
            .as_bytes(),
        );
        self.bytes
            .extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        self.bytes.extend_from_slice(content);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    fn open_part(&mut self) {
        self.bytes
            .extend_from_slice(format!("--{}\r\n", self.boundary).as_bytes());
    }

    /// The boundary separating parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Value for the `Content-Type` request header.
    pub fn content_type(&self) -> String {
        format!(
            "multipart/form-data; charset=utf-8; boundary={}",
            self.boundary
        )
    }

    /// Close the body and return its bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        self.bytes
    }
}

/// Percent-encode the characters that would break a quoted header value.
fn escape_filename(filename: &str) -> String {
    filename
        .replace('"', "%22")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::new()
    }
}
