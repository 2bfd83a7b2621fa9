//! Client configuration options.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::auth::{Clock, Credentials, SystemClock, DEFAULT_EXPIRY_PADDING_SECS};
use crate::{Environment, Error, Result};

use super::request::DEFAULT_ACCEPT_LANGUAGE;

/// Environment variable selecting `sandbox` or `live`.
pub const ENV_MODE: &str = "PAYPAL_MODE";
/// Environment variable holding the REST application client ID.
pub const ENV_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
/// Environment variable holding the REST application secret.
pub const ENV_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";

/// Configuration for the PayPal Payouts client.
///
/// # Example
///
/// ```
/// use paypal_payouts_rs::{ClientConfig, Environment};
/// use std::time::Duration;
///
/// let config = ClientConfig::new(Environment::Sandbox, "client-id", "client-secret")
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Sandbox or live
    pub environment: Environment,
    /// REST application credentials
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Accept-Language header value
    pub accept_language: String,
    /// Safety margin subtracted from each token's lifetime
    pub expiry_padding: Duration,
    /// Overrides the environment's base URL (proxies, mock servers)
    pub base_url: Option<String>,
    /// Time source for token expiry
    pub clock: Arc<dyn Clock>,
}

impl ClientConfig {
    /// Create a configuration with default options.
    pub fn new(
        environment: Environment,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            environment,
            credentials: Credentials::new(client_id, client_secret),
            timeout: Duration::from_secs(30),
            user_agent: format!("paypal-payouts-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            expiry_padding: Duration::from_secs(DEFAULT_EXPIRY_PADDING_SECS as u64),
            base_url: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Read `PAYPAL_MODE`, `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET`
    /// from the process environment. The mode defaults to sandbox.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the client ID or secret is missing or
    /// empty, or the mode is not `sandbox`/`live`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let environment = match lookup(ENV_MODE) {
            Some(mode) if !mode.trim().is_empty() => mode.parse()?,
            _ => Environment::default(),
        };

        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", key)))
        };

        Ok(Self::new(
            environment,
            required(ENV_CLIENT_ID)?,
            required(ENV_CLIENT_SECRET)?,
        ))
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the Accept-Language header.
    pub fn with_accept_language(mut self, language: impl Into<String>) -> Self {
        self.accept_language = language.into();
        self
    }

    /// Set the margin subtracted from each token's lifetime.
    pub fn with_expiry_padding(mut self, padding: Duration) -> Self {
        self.expiry_padding = padding;
        self
    }

    /// Send requests to `base_url` instead of the environment's host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Use a custom time source for token expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The base URL requests are sent to.
    pub fn resolved_base_url(&self) -> Result<Url> {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.api_base_url());
        Ok(Url::parse(base)?)
    }
}
