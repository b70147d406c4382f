//! # sfwire-auth
//!
//! Salesforce authentication via the OAuth 2.0 password grant.
//!
//! The flow exchanges user credentials plus connected-app credentials for a
//! short-lived access token and an instance base URL. The resulting
//! [`Session`] is immutable; to refresh a token, authenticate again. No
//! expiry tracking is performed.
//!
//! ## Security
//!
//! - Passwords, security tokens, consumer secrets, access tokens, and
//!   signatures are redacted in Debug output
//! - Tracing spans skip credential parameters
//! - Error messages avoid including credential values
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfwire_auth::{Credentials, PasswordFlowAuth};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sfwire_auth::Error> {
//!     let creds = Credentials::new("user@example.com", "password", "key", "secret")
//!         .with_security_token("token");
//!
//!     let auth = PasswordFlowAuth::new()?;
//!     let session = auth.authenticate(&creds).await?;
//!
//!     println!("instance: {}", session.instance_url);
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod password;
mod session;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use password::PasswordFlowAuth;
pub use session::Session;

/// Salesforce login URL for production orgs.
pub const PRODUCTION_LOGIN_URL: &str = "https://login.salesforce.com";

/// Salesforce login URL for sandbox orgs.
pub const SANDBOX_LOGIN_URL: &str = "https://test.salesforce.com";
