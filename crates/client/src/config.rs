//! Client configuration.
//!
//! Retry, timeout, and connection-pool tuning are intentionally absent:
//! the library forwards requests once and inherits the transport defaults
//! for everything else.

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User-Agent header value.
    pub user_agent: String,
    /// Whether to emit request/response tracing events.
    pub enable_tracing: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: crate::USER_AGENT.to_string(),
            enable_tracing: true,
        }
    }
}

impl ClientConfig {
    /// Create a new client config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set a custom User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable request/response tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.config.enable_tracing = enabled;
        self
    }

    /// Build the client configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.enable_tracing);
        assert!(config.user_agent.contains("sfwire"));
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .with_user_agent("custom-agent/1.0")
            .with_tracing(false)
            .build();

        assert!(!config.enable_tracing);
        assert_eq!(config.user_agent, "custom-agent/1.0");
    }
}
