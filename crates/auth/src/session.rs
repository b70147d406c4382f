//! Authenticated session.

use serde::{Deserialize, Serialize};

/// Result of a successful password-grant token exchange.
///
/// Immutable once obtained; re-authenticate to refresh. The library does
/// no expiry tracking. The access token and signature are redacted in
/// Debug output.
#[derive(Clone, Deserialize, Serialize)]
pub struct Session {
    /// Access token for bearer authentication.
    pub access_token: String,
    /// Base URL of the org instance all API calls are made against.
    pub instance_url: String,
    /// Identity URL of the authenticated user.
    #[serde(default)]
    pub id: Option<String>,
    /// Token type (usually "Bearer").
    #[serde(default)]
    pub token_type: Option<String>,
    /// Issuance timestamp (epoch milliseconds, as a string).
    #[serde(default)]
    pub issued_at: Option<String>,
    /// Signature over the id and issued_at values.
    #[serde(default)]
    pub signature: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("instance_url", &self.instance_url)
            .field("id", &self.id)
            .field("token_type", &self.token_type)
            .field("issued_at", &self.issued_at)
            .field("signature", &self.signature.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Session {
    /// Build a request dispatcher bound to this session.
    pub fn client(&self) -> sfwire_client::Result<sfwire_client::SessionClient> {
        sfwire_client::SessionClient::new(&self.instance_url, &self.access_token)
    }
}
