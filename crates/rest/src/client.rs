//! REST API operation facade.
//!
//! Each operation resolves an endpoint template with the client's API
//! version, then dispatches a single HTTP call and returns the raw decoded
//! response. No operation interprets the response body or status; that is
//! the caller's job.

use serde::Serialize;
use sfwire_auth::Session;
use sfwire_client::{ClientConfig, RequestMethod, RequestOptions, Response, SessionClient};
use tracing::instrument;

use crate::endpoint::Endpoint;
use crate::error::Result;

/// Salesforce REST API client.
///
/// A thin pass-through facade over the versioned REST endpoints. All
/// operations return the dispatcher's raw [`Response`] — status, headers,
/// and undecoded-schema JSON body — including non-2xx responses such as a
/// 300 multiple-choice on ambiguous external-id matches.
///
/// # Example
///
/// ```rust,ignore
/// use sfwire_rest::RestClient;
///
/// let client = RestClient::new(
///     "https://myorg.my.salesforce.com",
///     "access_token_here",
/// )?;
///
/// let response = client.query("SELECT Id, Name FROM Account").await?;
/// println!("{}", response.json_value()?);
/// ```
#[derive(Debug, Clone)]
pub struct RestClient {
    client: SessionClient,
}

impl RestClient {
    /// Create a new REST client with the given instance URL and access token.
    pub fn new(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        let client = SessionClient::new(instance_url, access_token)?;
        Ok(Self { client })
    }

    /// Create a new REST client with custom HTTP configuration.
    pub fn with_config(
        instance_url: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let client = SessionClient::with_config(instance_url, access_token, config)?;
        Ok(Self { client })
    }

    /// Create a REST client from an authenticated session.
    pub fn from_session(session: &Session) -> Result<Self> {
        Ok(Self {
            client: session.client()?,
        })
    }

    /// Create a REST client from an existing dispatcher.
    pub fn from_client(client: SessionClient) -> Self {
        Self { client }
    }

    /// Get the underlying dispatcher.
    pub fn inner(&self) -> &SessionClient {
        &self.client
    }

    /// Get the instance URL.
    pub fn instance_url(&self) -> &str {
        self.client.instance_url()
    }

    /// Get the API version.
    pub fn api_version(&self) -> &str {
        self.client.api_version()
    }

    /// Set the API version, affecting all subsequent calls made through
    /// this client.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.client = self.client.with_api_version(version);
        self
    }

    async fn get(&self, endpoint: Endpoint<'_>) -> Result<Response> {
        let path = endpoint.resolve(self.api_version());
        self.client
            .dispatch(RequestMethod::Get, &path, RequestOptions::new())
            .await
            .map_err(Into::into)
    }

    // =========================================================================
    // Discovery Operations
    // =========================================================================

    /// List the API versions the org supports.
    #[instrument(skip(self))]
    pub async fn versions(&self) -> Result<Response> {
        self.get(Endpoint::Versions).await
    }

    /// Get org API usage limits.
    #[instrument(skip(self))]
    pub async fn limits(&self) -> Result<Response> {
        self.get(Endpoint::Limits).await
    }

    /// List the resources available under the current API version.
    #[instrument(skip(self))]
    pub async fn resources(&self) -> Result<Response> {
        self.get(Endpoint::Resources).await
    }

    /// List all object types available in the org.
    #[instrument(skip(self))]
    pub async fn sobjects(&self) -> Result<Response> {
        self.get(Endpoint::SObjects).await
    }

    /// Get basic metadata for an object type.
    #[instrument(skip(self))]
    pub async fn sobject_metadata(&self, object: &str) -> Result<Response> {
        self.get(Endpoint::SObject { object }).await
    }

    /// Get full field/describe metadata for an object type.
    #[instrument(skip(self))]
    pub async fn describe(&self, object: &str) -> Result<Response> {
        self.get(Endpoint::Describe { object }).await
    }

    // =========================================================================
    // Record Operations
    // =========================================================================

    /// Fetch a record by id.
    #[instrument(skip(self))]
    pub async fn record(&self, object: &str, id: &str) -> Result<Response> {
        self.get(Endpoint::Record { object, id }).await
    }

    /// Fetch selected fields of a record by id.
    #[instrument(skip(self))]
    pub async fn record_fields(
        &self,
        object: &str,
        id: &str,
        fields: &[&str],
    ) -> Result<Response> {
        self.get(Endpoint::RecordFields { object, id, fields }).await
    }

    /// Fetch record(s) by an external-id field value.
    #[instrument(skip(self))]
    pub async fn record_by_external_id(
        &self,
        object: &str,
        field: &str,
        value: &str,
    ) -> Result<Response> {
        self.get(Endpoint::RecordByExternalId { object, field, value })
            .await
    }

    /// Create a record. The attributes are JSON-encoded and sent with a
    /// JSON content type.
    #[instrument(skip(self, attributes))]
    pub async fn create<T: Serialize>(&self, object: &str, attributes: &T) -> Result<Response> {
        let path = Endpoint::SObject { object }.resolve(self.api_version());
        let options = RequestOptions::new().json_value(serde_json::to_value(attributes)?);
        self.client
            .dispatch(RequestMethod::Post, &path, options)
            .await
            .map_err(Into::into)
    }

    /// Update a record by id with a JSON body.
    #[instrument(skip(self, attributes))]
    pub async fn update<T: Serialize>(
        &self,
        object: &str,
        id: &str,
        attributes: &T,
    ) -> Result<Response> {
        let path = Endpoint::Record { object, id }.resolve(self.api_version());
        let options = RequestOptions::new().json_value(serde_json::to_value(attributes)?);
        self.client
            .dispatch(RequestMethod::Patch, &path, options)
            .await
            .map_err(Into::into)
    }

    /// Delete a record by id.
    #[instrument(skip(self))]
    pub async fn delete(&self, object: &str, id: &str) -> Result<Response> {
        let path = Endpoint::Record { object, id }.resolve(self.api_version());
        self.client
            .dispatch(RequestMethod::Delete, &path, RequestOptions::new())
            .await
            .map_err(Into::into)
    }

    /// Upsert a record by an external-id field value.
    ///
    /// Always a PATCH against the external-id path; insert-vs-update (and
    /// a 300 response on ambiguous matches) is decided server-side and
    /// passed through unaltered.
    #[instrument(skip(self, attributes))]
    pub async fn upsert<T: Serialize>(
        &self,
        object: &str,
        field: &str,
        value: &str,
        attributes: &T,
    ) -> Result<Response> {
        let path =
            Endpoint::RecordByExternalId { object, field, value }.resolve(self.api_version());
        let options = RequestOptions::new().json_value(serde_json::to_value(attributes)?);
        self.client
            .dispatch(RequestMethod::Patch, &path, options)
            .await
            .map_err(Into::into)
    }

    // =========================================================================
    // Query and Search
    // =========================================================================

    /// Execute a SOQL query. Spaces in the query are replaced with `+`
    /// before insertion into the path.
    #[instrument(skip(self))]
    pub async fn query(&self, soql: &str) -> Result<Response> {
        self.get(Endpoint::Query { soql }).await
    }

    /// Execute a SOSL search. The search text is URL-encoded.
    #[instrument(skip(self))]
    pub async fn search(&self, sosl: &str) -> Result<Response> {
        self.get(Endpoint::Search { sosl }).await
    }

    // =========================================================================
    // Escape Hatch
    // =========================================================================

    /// Dispatch a request against an arbitrary path under the instance
    /// URL, with typed options.
    pub async fn dispatch(
        &self,
        method: RequestMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        self.client
            .dispatch(method, path, options)
            .await
            .map_err(Into::into)
    }
}
