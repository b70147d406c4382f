//! Error types for sfwire-rest.

/// Result type alias for sfwire-rest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for sfwire-rest operations.
///
/// A non-2xx response from an operation is not represented here: the raw
/// response is handed back for the caller to inspect. These errors cover
/// transport failures and body encoding only.
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
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Failure in the underlying dispatcher (transport or decode).
    #[error("Client error: {0}")]
    Client(String),

    /// Failure encoding a request body as JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

impl From<sfwire_client::Error> for Error {
    fn from(err: sfwire_client::Error) -> Self {
        Error::with_source(ErrorKind::Client(err.to_string()), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}
