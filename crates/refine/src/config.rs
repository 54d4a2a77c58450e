//! Client configuration.

use std::time::Duration;

use crate::error::{RefineError, Result};

/// Default OpenRefine server address.
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:3333";

/// Default request timeout for the built-in transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a [`RefineClient`](crate::RefineClient).
#[derive(Debug, Clone)]
pub struct RefineConfig {
    /// Base URL of the OpenRefine server, without a trailing slash.
    pub server: String,
    /// Whether `"code": "error"` responses become [`RefineError::Api`].
    ///
    /// When disabled the error-shaped response is handed back as data.
    pub throws_exceptions: bool,
    /// Per-request timeout for the built-in transport (None = wait forever).
    pub timeout: Option<Duration>,
    /// User-Agent header sent by the built-in transport.
    pub user_agent: String,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            throws_exceptions: true,
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: concat!("refine/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl RefineConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from environment variables.
    ///
    /// `OPENREFINE_URL` overrides the server and `OPENREFINE_TIMEOUT_SECS`
    /// the timeout (`0` disables it). Unset variables keep the defaults.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(server) = std::env::var("OPENREFINE_URL") {
            config = config.with_server(server);
        }

        if let Ok(secs) = std::env::var("OPENREFINE_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                RefineError::Config(format!("OPENREFINE_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the server base URL.
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = server.into().trim_end_matches('/').to_string();
        self
    }

    /// Choose whether API-level errors are raised or returned.
    pub fn with_throws_exceptions(mut self, throws: bool) -> Self {
        self.throws_exceptions = throws;
        self
    }

    /// Set the request timeout (None = wait forever).
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Absolute URL of a core command.
    pub fn command_url(&self, command: &str) -> String {
        format!("{}/command/core/{}", self.server, command)
    }
}
