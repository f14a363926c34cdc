//! Public configuration for the policy server client.
//!
//! `PsClientConfig` is the stable public surface; the client works from the
//! validated internal `PsConfig` derived from it.

use std::time::Duration;

use url::Url;

use crate::error::{PsError, PsResult};

/// Configuration for the policy server client.
///
/// There is no default host: the base URL is required.
///
/// # Example
///
/// ```
/// use emdac_ps::PsClientConfig;
/// use std::time::Duration;
///
/// let config = PsClientConfig::new("https://policy.example.org")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("wallet/2.1");
/// ```
#[derive(Debug, Clone)]
pub struct PsClientConfig {
    /// Base URL of the policy server
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
}

impl PsClientConfig {
    /// Create a configuration for the server at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_agent: concat!("emdac-ps/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Send `Authorization: Bearer <token>` with every request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Validated configuration used by the client and backend.
#[derive(Debug, Clone)]
pub(crate) struct PsConfig {
    pub base_url: Url,
    pub user_agent: String,
    pub timeout: Duration,
    pub token: Option<String>,
}

impl PsConfig {
    pub fn from_public(config: &PsClientConfig) -> PsResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(PsError::UnsupportedScheme {
                scheme: base_url.scheme().to_string(),
            });
        }

        Ok(Self {
            base_url,
            user_agent: config.user_agent.clone(),
            timeout: config.timeout,
            token: config.token.clone(),
        })
    }
}
