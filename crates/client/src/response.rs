//! Decoded HTTP responses.
//!
//! Responses are read eagerly into an owned value so callers get status,
//! headers, and body together with no transport handle attached. The body
//! is kept as raw bytes; JSON decoding happens on demand and imposes no
//! schema.

use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, ErrorKind, Result};

/// An owned, decoded HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl Response {
    /// Create a response from parts. Header names are normalized to
    /// lowercase for case-insensitive lookup.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Read a reqwest response into an owned Response.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self> {
        let status = resp.status().as_u16();
        let headers = resp
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_lowercase(), v.to_string()))
            })
            .collect();
        let body = resp.bytes().await?;

        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Get all response headers (names lowercased).
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Get the Content-Type header.
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Get the raw body bytes.
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// Get the body as UTF-8 text.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.body).map_err(|e| {
            Error::with_source(ErrorKind::Other("response body is not UTF-8".to_string()), e)
        })
    }

    /// Deserialize the body as JSON into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(Into::into)
    }

    /// Decode the body as an arbitrary JSON value.
    ///
    /// An empty body (e.g. 204 No Content from update/delete) decodes to
    /// `Value::Null`.
    pub fn json_value(&self) -> Result<Value> {
        if self.body.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body).map_err(Into::into)
    }
}
