//! OAuth 2.0 password grant.
//!
//! Exchanges username/password plus connected-app credentials directly for
//! an access token. One form-encoded POST to the token endpoint; no retry.

use sfwire_client::{ClientConfig, HttpClient};
use tracing::instrument;

use crate::credentials::Credentials;
use crate::error::{Error, ErrorKind, Result};
use crate::session::Session;

/// Path of the OAuth token endpoint, relative to the login host.
const TOKEN_PATH: &str = "/services/oauth2/token";

/// Password-grant authenticator.
#[derive(Clone)]
pub struct PasswordFlowAuth {
    http: HttpClient,
    login_url: Option<String>,
}

impl std::fmt::Debug for PasswordFlowAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordFlowAuth")
            .field("login_url", &self.login_url)
            .finish_non_exhaustive()
    }
}

impl PasswordFlowAuth {
    /// Create a new authenticator. The login host is chosen per call from
    /// the credentials' sandbox flag.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new authenticator with custom HTTP configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
            login_url: None,
        })
    }

    /// Override the login host, bypassing sandbox-flag selection. Mainly
    /// for tests against a local server.
    pub fn with_login_url(mut self, url: impl Into<String>) -> Self {
        self.login_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Exchange credentials for a session.
    ///
    /// Submits the password grant and parses the token-endpoint JSON into a
    /// [`Session`]. A non-success status or an unparsable body surfaces as
    /// an authentication error carrying the raw response body.
    #[instrument(skip(self, credentials), fields(username = %credentials.username, sandbox = credentials.sandbox))]
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let login_url = self
            .login_url
            .as_deref()
            .unwrap_or_else(|| credentials.login_url());
        let token_url = format!("{}{}", login_url, TOKEN_PATH);

        let fields = vec![
            ("grant_type".to_string(), "password".to_string()),
            ("client_id".to_string(), credentials.consumer_key.clone()),
            (
                "client_secret".to_string(),
                credentials.consumer_secret().to_string(),
            ),
            ("username".to_string(), credentials.username.clone()),
            ("password".to_string(), credentials.password_with_token()),
            ("format".to_string(), "json".to_string()),
        ];

        let request = self.http.post(token_url).form(fields);
        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().map_err(Error::from)?.to_string();

        if !response.is_success() {
            return Err(Self::oauth_error(status, body));
        }

        serde_json::from_str(&body).map_err(|e| {
            Error::with_source(
                ErrorKind::OAuth {
                    error: "malformed_response".to_string(),
                    description: format!("token endpoint returned unparsable body: {e}"),
                    raw_response: body,
                },
                e,
            )
        })
    }

    /// Build an authentication error from a non-success token response,
    /// keeping the raw body for caller inspection.
    fn oauth_error(status: u16, body: String) -> Error {
        #[derive(serde::Deserialize)]
        struct OAuthErrorResponse {
            error: String,
            error_description: String,
        }

        match serde_json::from_str::<OAuthErrorResponse>(&body) {
            Ok(parsed) => Error::new(ErrorKind::OAuth {
                error: parsed.error,
                description: parsed.error_description,
                raw_response: body,
            }),
            Err(_) => Error::new(ErrorKind::OAuth {
                error: format!("http_{status}"),
                description: "token endpoint returned a non-success status".to_string(),
                raw_response: body,
            }),
        }
    }
}
