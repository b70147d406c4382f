//! Core HTTP client.
//!
//! One call in, one decoded response out. Non-2xx statuses are not
//! classified here; the response is handed back as-is.

use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::{RequestBody, RequestBuilder, RequestMethod};
use crate::response::Response;

/// HTTP client wrapping the underlying transport.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Create a GET request builder.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Get, url)
    }

    /// Create a POST request builder.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Post, url)
    }

    /// Create a PATCH request builder.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Patch, url)
    }

    /// Create a DELETE request builder.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(RequestMethod::Delete, url)
    }

    /// Execute a request and return the decoded response.
    ///
    /// Exactly one HTTP call is performed. Transport failures and body
    /// decode failures are errors; any HTTP status is a successful result.
    #[instrument(skip(self, request), fields(method = ?request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self.inner.request(request.method.to_reqwest(), &request.url);

        if let Some(ref token) = request.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if !request.query_params.is_empty() {
            req = req.query(&request.query_params);
        }

        if let Some(ref body) = request.body {
            req = match body {
                RequestBody::Json(value) => req.json(value),
                RequestBody::Form(fields) => req.form(fields),
            };
        }

        if self.config.enable_tracing {
            debug!(method = ?request.method, url = %request.url, "Sending request");
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            debug!(status = response.status().as_u16(), "Response received");
        }

        Response::read(response).await
    }
}
