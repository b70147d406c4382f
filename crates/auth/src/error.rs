//! Error types for sfwire-auth.
//!
//! Error messages are designed to avoid exposing sensitive credential data.

/// Result type alias for sfwire-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sfwire-auth operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// The raw body returned by the token endpoint, when the failure came
    /// from the remote service. Kept verbatim for caller inspection.
    pub fn raw_response(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::OAuth { raw_response, .. } => Some(raw_response),
            _ => None,
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint rejected the grant. `raw_response` carries the
    /// body verbatim for caller inspection.
    #[error("OAuth error: {error} - {description}")]
    OAuth {
        error: String,
        description: String,
        raw_response: String,
    },

    /// HTTP error during authentication.
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<sfwire_client::Error> for Error {
    fn from(err: sfwire_client::Error) -> Self {
        // Sanitize any potential credential exposure
        let message = err.to_string();
        let sanitized = if message.contains("access_token") || message.contains("Bearer") {
            "HTTP request failed (details redacted for security)".to_string()
        } else {
            message
        };
        Error::with_source(ErrorKind::Http(sanitized), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}
