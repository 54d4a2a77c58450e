//! Blocking `reqwest` transport.

use reqwest::blocking::{Client, Response};
use reqwest::header::{CONTENT_TYPE, LOCATION};
use reqwest::redirect::Policy;
use tracing::debug;

use crate::config::RefineConfig;
use crate::error::{RefineError, Result};

use super::multipart::MultipartBody;
use super::request::{HttpResponse, Params, Transport};

/// Default transport backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a client from the timeout and user agent in `config`.
    pub fn new(config: &RefineConfig) -> Result<Self> {
        let client = Client::builder()
            .redirect(Policy::none())
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| RefineError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client.
    ///
    /// The client must be built with `redirect(Policy::none())`, otherwise
    /// project creation cannot see the redirect's `Location` header.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    fn read(response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes()?.to_vec();

        debug!(status, bytes = body.len(), "response received");

        Ok(HttpResponse {
            status,
            location,
            body,
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str, query: &Params) -> Result<HttpResponse> {
        debug!(url, params = query.len(), "GET");
        let response = self.client.get(url).query(query).send()?;
        Self::read(response)
    }

    fn post_form(&self, url: &str, form: &Params) -> Result<HttpResponse> {
        debug!(url, params = form.len(), "POST form");
        let response = self.client.post(url).form(form).send()?;
        Self::read(response)
    }

    fn post_multipart(&self, url: &str, body: MultipartBody) -> Result<HttpResponse> {
        debug!(url, boundary = body.boundary(), "POST multipart");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, body.content_type())
            .body(body.into_bytes())
            .send()?;
        Self::read(response)
    }

    fn name(&self) -> &str {
        "reqwest-blocking"
    }
}
