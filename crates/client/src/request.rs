//! HTTP request building.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// HTTP request method.
///
/// Only the verbs the operation facade uses are represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Builder for HTTP requests.
#[derive(Debug)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) query_params: Vec<(String, String)>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) bearer_token: Option<String>,
}

/// Request body content.
#[derive(Debug)]
pub enum RequestBody {
    Json(Value),
    Form(Vec<(String, String)>),
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            query_params: Vec::new(),
            body: None,
            bearer_token: None,
        }
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }

    /// Set JSON body.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body)?;
        self.body = Some(RequestBody::Json(value));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        Ok(self)
    }

    /// Set raw JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self
    }

    /// Set form-encoded body.
    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(fields));
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        self
    }
}

/// Caller-supplied options for a dispatched request.
///
/// The recognized fields are enumerated: a JSON body, extra headers, and
/// extra query parameters. Nothing else is merged into the outgoing
/// request.
#[derive(Debug, Default)]
pub struct RequestOptions {
    /// JSON body to send, tagged with a JSON content type.
    pub body: Option<Value>,
    /// Extra headers to attach.
    pub headers: HashMap<String, String>,
    /// Extra query parameters to append.
    pub params: Vec<(String, String)>,
}

impl RequestOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a JSON body from any serializable value.
    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Set a raw JSON body.
    pub fn json_value(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Add a query parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    /// Merge these options into a request builder.
    pub fn apply(self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in self.headers {
            builder = builder.header(name, value);
        }
        for (name, value) in self.params {
            builder = builder.query(name, value);
        }
        if let Some(body) = self.body {
            builder = builder.json_value(body);
        }
        builder
    }
}
