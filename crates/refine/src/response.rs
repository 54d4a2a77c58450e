//! Response parsing for command results.

use serde_json::Value;
use tracing::warn;

use crate::error::Result;

/// Parse a command response body.
///
/// Some commands answer with a bare line that is not a valid JSON document
/// on its own. When the strict parse fails the body is wrapped in a
/// one-element array, parsed again and unwrapped. An empty body unwraps to
/// `null`. If both attempts fail the error from the strict parse is returned.
pub fn parse_response(body: &str) -> Result<Value> {
    let strict_err = match serde_json::from_str::<Value>(body) {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };

    match serde_json::from_str::<Vec<Value>>(&format!("[{}]", body)) {
        Ok(values) => match values.into_iter().next() {
            Some(value) => {
                warn!("response is not a single JSON document, kept its first value");
                Ok(value)
            }
            None => Ok(Value::Null),
        },
        Err(_) => Err(strict_err.into()),
    }
}

/// Whether a parsed response is an API-level error (`"code": "error"`).
pub fn is_api_error(response: &Value) -> bool {
    response
        .as_object()
        .and_then(|obj| obj.get("code"))
        .and_then(Value::as_str)
        == Some("error")
}

/// Outcome of deleting a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server answered with a `code` (normally `"ok"`).
    Confirmed { code: String },
    /// The reply could not be read, so deletion is unconfirmed.
    Unknown,
}

impl DeleteOutcome {
    /// Read the `code` field of a delete reply, swallowing parse errors.
    pub fn from_body(body: &str) -> Self {
        let code = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("code").cloned());

        match code {
            Some(Value::String(code)) => DeleteOutcome::Confirmed { code },
            Some(Value::Null) | None => {
                warn!("delete-project reply has no readable code");
                DeleteOutcome::Unknown
            }
            Some(other) => DeleteOutcome::Confirmed {
                code: other.to_string(),
            },
        }
    }

    /// The server code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            DeleteOutcome::Confirmed { code } => Some(code),
            DeleteOutcome::Unknown => None,
        }
    }

    /// True when the server confirmed with `"ok"`.
    pub fn is_deleted(&self) -> bool {
        self.code() == Some("ok")
    }
}
