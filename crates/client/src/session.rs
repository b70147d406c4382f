//! Session-bound request dispatcher.
//!
//! `SessionClient` combines an authenticated session's instance URL and
//! access token with HTTP infrastructure. Higher-level crates resolve a
//! path and call `dispatch`; the API version lives here as an explicit
//! field rather than process-wide state, so changing it is a per-client
//! rebind that never affects in-flight calls.
//!
//! The access token is redacted in Debug output.

use tracing::instrument;

use crate::client::HttpClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::{RequestBuilder, RequestMethod, RequestOptions};
use crate::response::Response;
use crate::DEFAULT_API_VERSION;

/// Request dispatcher bound to an authenticated session.
#[derive(Clone)]
pub struct SessionClient {
    http: HttpClient,
    instance_url: String,
    access_token: String,
    api_version: String,
}

impl std::fmt::Debug for SessionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionClient")
            .field("instance_url", &self.instance_url)
            .field("access_token", &"[REDACTED]")
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl SessionClient {
    /// Create a new dispatcher with the given instance URL and access token.
    pub fn new(instance_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        Self::with_config(instance_url, access_token, ClientConfig::default())
    }

    /// Create a new dispatcher with custom configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = HttpClient::new(config)?;
        Ok(Self {
            http,
            instance_url: instance_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Set the API version (e.g. "31.0"). Affects all subsequent calls
    /// made through this client.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        &self.instance_url
    }

    /// Get the access token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build the full URL for a path.
    ///
    /// If the path starts with `/`, it's appended to the instance URL.
    /// A full URL is passed through unchanged.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.instance_url, path)
        } else {
            format!("{}/{}", self.instance_url, path)
        }
    }

    /// Dispatch one request: build `instance_url + path`, attach the
    /// session's bearer token, merge the caller's options, perform the
    /// call, and return the decoded response.
    ///
    /// Any HTTP status is returned as a `Response`; only transport and
    /// decode failures are errors.
    #[instrument(skip(self, options), fields(method = ?method, path = %path))]
    pub async fn dispatch(
        &self,
        method: RequestMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        let url = self.url(path);
        let request = RequestBuilder::new(method, url).bearer_auth(&self.access_token);
        let request = options.apply(request);
        self.http.execute(request).await
    }
}
