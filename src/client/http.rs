//! HTTP client implementation for the PayPal Payouts API.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use url::Url;

use crate::api::PayoutsService;
use crate::auth::{AccessToken, TokenManager};
use crate::{Environment, Error, Result};

use super::classify::StatusPolicy;
use super::config::ClientConfig;
use super::request;

/// The main client for interacting with the PayPal Payouts API.
///
/// The client owns its configuration and its access token cache, so
/// several independently configured clients can coexist in one process.
/// Cloning is cheap and clones share the token cache.
///
/// # Example
///
/// ```no_run
/// use paypal_payouts_rs::{ClientConfig, Environment, PayoutClient, PayoutItemId};
///
/// # async fn example() -> paypal_payouts_rs::Result<()> {
/// let client = PayoutClient::new(ClientConfig::new(
///     Environment::Sandbox,
///     "your-client-id",
///     "your-client-secret",
/// ))?;
///
/// let payout = client
///     .payouts()
///     .get(&PayoutItemId::new("P3FKTDYE3DHMG"))
///     .await?;
/// println!("Status: {:?}", payout.transaction_status);
/// # Ok(())
/// # }
/// ```
pub struct PayoutClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) tokens: TokenManager,
    pub(crate) config: ClientConfig,
}

impl PayoutClient {
    /// Create a new client. No request is made until the first operation.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let base_url = config.resolved_base_url()?;
        let token_url = request::endpoint_url(&base_url, request::TOKEN_PATH, &[])?;
        let padding = chrono::Duration::from_std(config.expiry_padding)
            .map_err(|_| Error::Config("Token expiry padding is too large".to_string()))?;

        let tokens = TokenManager::new(
            http.clone(),
            token_url,
            config.credentials.clone(),
            config.accept_language.clone(),
            padding,
            config.clock.clone(),
        );

        tracing::debug!(environment = %config.environment, base_url = %base_url, "PayPal client created");

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                tokens,
                config,
            }),
        })
    }

    /// Create a client configured from `PAYPAL_MODE`, `PAYPAL_CLIENT_ID`
    /// and `PAYPAL_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Get the payouts service.
    pub fn payouts(&self) -> PayoutsService {
        PayoutsService::new(self.inner.clone())
    }

    /// Get a valid access token, requesting a new one if none is cached or
    /// the cached one has expired.
    pub async fn token(&self) -> Result<Arc<AccessToken>> {
        self.inner.tokens.get_valid_token().await
    }

    /// Request a new access token even if the cached one is still valid.
    pub async fn refresh_token(&self) -> Result<Arc<AccessToken>> {
        self.inner.tokens.refresh().await
    }

    /// Drop the cached access token.
    pub async fn invalidate_token(&self) {
        self.inner.tokens.invalidate().await
    }

    /// When the cached token stops being used, if one is cached.
    pub async fn token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.inner.tokens.expires_at().await
    }

    /// Get the configured environment.
    pub fn environment(&self) -> Environment {
        self.inner.config.environment
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Make an authorized GET request.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        policy: StatusPolicy,
    ) -> Result<T> {
        let url = request::endpoint_url(&self.base_url, segments, &[])?;
        let token = self.tokens.get_valid_token().await?;
        let headers = request::json_headers(&token, &self.config.accept_language)?;

        self.execute(self.http.get(url).headers(headers), policy).await
    }

    /// Make an authorized POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &B,
        policy: StatusPolicy,
    ) -> Result<T> {
        let url = request::endpoint_url(&self.base_url, segments, query)?;
        let body = serde_json::to_vec(body)?;
        let token = self.tokens.get_valid_token().await?;
        let headers = request::json_headers(&token, &self.config.accept_language)?;

        self.execute(self.http.post(url).headers(headers).body(body), policy)
            .await
    }

    /// Send a request, classify the status and decode the body.
    async fn execute<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        policy: StatusPolicy,
    ) -> Result<T> {
        let response = builder.send().await.map_err(Error::from_transport)?;

        let status = response.status().as_u16();
        let path = response.url().path().to_string();
        let body = response.text().await.map_err(Error::from_transport)?;

        tracing::debug!(path = %path, status, "PayPal API response");

        let body = policy.check(status, body)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Clone for PayoutClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PayoutClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayoutClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
