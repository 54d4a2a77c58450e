//! Error types for the Refine client.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// Main error type for Refine operations.
#[derive(Debug, Error)]
pub enum RefineError {
    /// Metadata lookup for a bound project reported an error.
    #[error("{message} (project {project_id} on {server})")]
    ProjectNotFound {
        message: String,
        project_id: String,
        server: String,
    },

    /// The upload went through but no project id came back.
    #[error("Error creating project: {0}")]
    ProjectCreationFailed(String),

    /// A command answered with `"code": "error"`.
    #[error("API error: {response}")]
    Api { response: Value },

    /// Error from the HTTP transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error reading a file to upload or an operations file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server URL could not be parsed.
    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response parsed but lacks a field the client depends on.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RefineError {
    /// The full server response, for API-level errors.
    pub fn response(&self) -> Option<&Value> {
        match self {
            RefineError::Api { response } => Some(response),
            _ => None,
        }
    }
}

/// Result type alias for Refine operations.
pub type Result<T> = std::result::Result<T, RefineError>;
