//! Credentials for the password grant.

use crate::{PRODUCTION_LOGIN_URL, SANDBOX_LOGIN_URL};

/// Credentials for authenticating a user against a connected app.
///
/// Supplied by the caller and never persisted by the library. Sensitive
/// fields are redacted in Debug output to prevent accidental exposure in
/// logs.
#[derive(Clone)]
pub struct Credentials {
    /// Username.
    pub username: String,
    /// Password.
    password: String,
    /// Security token, appended to the password during the grant. Empty
    /// when the org's IP restrictions make it unnecessary.
    security_token: String,
    /// Connected app consumer key (client_id).
    pub consumer_key: String,
    /// Connected app consumer secret (client_secret).
    consumer_secret: String,
    /// Authenticate against the sandbox login host instead of production.
    pub sandbox: bool,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("security_token", &"[REDACTED]")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("sandbox", &self.sandbox)
            .finish()
    }
}

impl Credentials {
    /// Create credentials for a production org.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            security_token: String::new(),
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            sandbox: false,
        }
    }

    /// Set the security token.
    pub fn with_security_token(mut self, token: impl Into<String>) -> Self {
        self.security_token = token.into();
        self
    }

    /// Authenticate against the sandbox login host.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Load credentials from environment variables:
    /// `SFWIRE_USERNAME`, `SFWIRE_PASSWORD`, `SFWIRE_CONSUMER_KEY`,
    /// `SFWIRE_CONSUMER_SECRET`, and optionally `SFWIRE_SECURITY_TOKEN`
    /// and `SFWIRE_SANDBOX` ("true"/"1").
    pub fn from_env() -> crate::Result<Self> {
        let var = |name: &str| {
            std::env::var(name)
                .map_err(|_| crate::Error::new(crate::ErrorKind::EnvVar(name.to_string())))
        };

        let mut creds = Self::new(
            var("SFWIRE_USERNAME")?,
            var("SFWIRE_PASSWORD")?,
            var("SFWIRE_CONSUMER_KEY")?,
            var("SFWIRE_CONSUMER_SECRET")?,
        );

        if let Ok(token) = std::env::var("SFWIRE_SECURITY_TOKEN") {
            creds = creds.with_security_token(token);
        }
        if let Ok(sandbox) = std::env::var("SFWIRE_SANDBOX") {
            creds = creds.with_sandbox(sandbox == "true" || sandbox == "1");
        }

        Ok(creds)
    }

    /// The login host for these credentials: the sandbox host when the
    /// sandbox flag is set, else the production host.
    pub fn login_url(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_LOGIN_URL
        } else {
            PRODUCTION_LOGIN_URL
        }
    }

    /// The password with the security token concatenated, as the grant
    /// requires (no separator).
    pub(crate) fn password_with_token(&self) -> String {
        format!("{}{}", self.password, self.security_token)
    }

    /// Get the consumer secret (for internal use).
    pub(crate) fn consumer_secret(&self) -> &str {
        &self.consumer_secret
    }
}
