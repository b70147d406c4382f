//! # sfwire
//!
//! A thin pass-through Salesforce REST API client for Rust.
//!
//! sfwire authenticates via the OAuth 2.0 password grant, builds versioned
//! endpoint URLs, forwards HTTP requests, and returns raw decoded JSON
//! responses without interpretation. Retry, pagination, rate-limit
//! handling, and response validation are deliberately left to the caller.
//!
//! ## Security
//!
//! - Sensitive data (tokens, passwords, secrets) are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages avoid including credential values
//!
//! ## Crates
//!
//! - **sfwire-client** - HTTP dispatch infrastructure and session-bound dispatcher
//! - **sfwire-auth** - OAuth 2.0 password grant and credentials management
//! - **sfwire-rest** - Endpoint templates and the REST operation facade
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sfwire::{Credentials, PasswordFlowAuth, RestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("user@example.com", "password", "key", "secret")
//!         .with_security_token("token");
//!
//!     let session = PasswordFlowAuth::new()?.authenticate(&creds).await?;
//!     let client = RestClient::from_session(&session)?;
//!
//!     let accounts = client.query("SELECT Id, Name FROM Account").await?;
//!     println!("{}", accounts.json_value()?);
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
pub use sfwire_auth as auth;
pub use sfwire_client as client;
pub use sfwire_rest as rest;

// Re-export commonly used types at the top level
pub use sfwire_auth::{Credentials, PasswordFlowAuth, Session};
pub use sfwire_client::{ClientConfig, RequestMethod, RequestOptions, Response, SessionClient};
pub use sfwire_rest::{Endpoint, RestClient};
