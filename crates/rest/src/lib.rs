//! # sfwire-rest
//!
//! Salesforce REST API operations: a fixed endpoint template registry and
//! a thin operation facade over it.
//!
//! ## Operations
//!
//! - **Discovery** - API versions, org limits, resources, object listing,
//!   object metadata, full describe
//! - **Records** - create, fetch (by id, by fields, by external id),
//!   update, delete, upsert-by-external-id
//! - **SOQL query** and **SOSL search**
//!
//! Every operation returns the raw decoded response (status, headers,
//! schemaless JSON). The library never interprets response bodies, never
//! retries, and never paginates; non-2xx statuses are passed through for
//! the caller to inspect.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sfwire_auth::{Credentials, PasswordFlowAuth};
//! use sfwire_rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!     let session = PasswordFlowAuth::new()?.authenticate(&creds).await?;
//!     let client = RestClient::from_session(&session)?;
//!
//!     // Create
//!     let created = client
//!         .create("Account", &serde_json::json!({"Name": "New Account"}))
//!         .await?;
//!     let id = created.json_value()?["id"].as_str().unwrap().to_string();
//!
//!     // Query
//!     let result = client.query("SELECT Id, Name FROM Account").await?;
//!     println!("{}", result.json_value()?);
//!
//!     // Delete
//!     client.delete("Account", &id).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod endpoint;
mod error;

pub use client::RestClient;
pub use endpoint::Endpoint;
pub use error::{Error, ErrorKind, Result};

// Re-export sfwire-client types that callers need alongside the facade
pub use sfwire_client::{ClientConfig, RequestMethod, RequestOptions, Response};
