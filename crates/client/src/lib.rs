//! # sfwire-client
//!
//! HTTP dispatch infrastructure for the sfwire Salesforce client.
//!
//! This crate provides the lowest layer of the library: a request builder,
//! a thin wrapper over `reqwest`, and the `SessionClient` dispatcher that
//! higher-level crates (`sfwire-auth`, `sfwire-rest`) build on.
//!
//! The dispatcher is deliberately a pass-through. It performs exactly one
//! HTTP call per invocation and hands back the decoded response whatever
//! its status code; callers inspect status and body themselves. There is
//! no retry, no rate-limit handling, and no timeout beyond the transport
//! defaults.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │                 (sfwire-rest, sfwire-auth)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      SessionClient                          │
//! │  - Holds instance URL, access token, API version            │
//! │  - dispatch(method, path, options) -> Response              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       HttpClient                            │
//! │  - One HTTP call per execute(), no status interpretation    │
//! │  - Request building, response decoding                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfwire_client::{RequestMethod, RequestOptions, SessionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sfwire_client::Error> {
//!     let client = SessionClient::new(
//!         "https://na1.salesforce.com",
//!         "access_token_here",
//!     )?;
//!
//!     let response = client
//!         .dispatch(
//!             RequestMethod::Get,
//!             "/services/data/v31.0/sobjects/",
//!             RequestOptions::new(),
//!         )
//!         .await?;
//!
//!     println!("{} {}", response.status(), response.json_value()?);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;
mod session;

pub use client::HttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBody, RequestBuilder, RequestMethod, RequestOptions};
pub use response::Response;
pub use session::SessionClient;

/// Default Salesforce API version used for URL construction.
pub const DEFAULT_API_VERSION: &str = "31.0";

/// User-Agent string for the client.
pub const USER_AGENT: &str = concat!("sfwire/", env!("CARGO_PKG_VERSION"));
