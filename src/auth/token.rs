//! Access token caching and refresh.

use chrono::{DateTime, Duration, Utc};
use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use url::Url;

use crate::client::classify::StatusPolicy;
use crate::client::request;
use crate::{Error, Result};

use super::Credentials;

/// Default safety margin subtracted from a token's lifetime.
pub const DEFAULT_EXPIRY_PADDING_SECS: i64 = 2;

/// Source of the current time for token expiry decisions.
///
/// The client uses [`SystemClock`] unless another clock is configured
/// with [`ClientConfig::with_clock`](crate::ClientConfig::with_clock).
pub trait Clock: Send + Sync + fmt::Debug {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time via [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// An OAuth2 access token issued by the token endpoint.
///
/// Tokens are handed out as `Arc<AccessToken>`. Two calls that return the
/// same `Arc` (see [`Arc::ptr_eq`]) were served from the cache.
#[derive(Clone)]
pub struct AccessToken {
    access_token: SecretString,
    /// Token type, normally `"Bearer"`
    pub token_type: String,
    /// Lifetime in seconds, as reported by the server
    pub expires_in: i64,
    /// Space-separated list of granted scopes
    pub scope: Option<String>,
    /// PayPal application ID
    pub app_id: Option<String>,
    /// Server nonce
    pub nonce: Option<String>,
    /// Remaining response fields not modelled above
    pub extra: HashMap<String, Value>,
}

impl AccessToken {
    /// The bearer credential.
    pub fn secret(&self) -> &SecretString {
        &self.access_token
    }

    /// Iterate over the granted scopes.
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.as_deref().unwrap_or_default().split_whitespace()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("app_id", &self.app_id)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    token_type: String,
    expires_in: i64,
    #[serde(default)]
    scope: Option<String>,
    #[serde(default)]
    app_id: Option<String>,
    #[serde(default)]
    nonce: Option<String>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl From<TokenResponse> for AccessToken {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: SecretString::from(response.access_token),
            token_type: response.token_type,
            expires_in: response.expires_in,
            scope: response.scope,
            app_id: response.app_id,
            nonce: response.nonce,
            extra: response.extra,
        }
    }
}

struct CachedToken {
    token: Arc<AccessToken>,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Owns the cached access token and decides when to fetch a new one.
///
/// Refreshes happen under the write lock and re-check the cache first, so
/// concurrent callers that all observe an expired token share a single
/// token request.
pub(crate) struct TokenManager {
    http: reqwest::Client,
    token_url: Url,
    credentials: Credentials,
    accept_language: String,
    padding: Duration,
    clock: Arc<dyn Clock>,
    cached: RwLock<Option<CachedToken>>,
}

impl TokenManager {
    pub(crate) fn new(
        http: reqwest::Client,
        token_url: Url,
        credentials: Credentials,
        accept_language: String,
        padding: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            http,
            token_url,
            credentials,
            accept_language,
            padding,
            clock,
            cached: RwLock::new(None),
        }
    }

    /// Return the cached token, fetching a new one if none is cached or
    /// the cached one has expired.
    pub(crate) async fn get_valid_token(&self) -> Result<Arc<AccessToken>> {
        {
            let cached = self.cached.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.is_valid_at(self.clock.now()) {
                    return Ok(entry.token.clone());
                }
            }
        }

        let mut cached = self.cached.write().await;

        // Another caller may have refreshed while we waited for the lock.
        if let Some(entry) = cached.as_ref() {
            if entry.is_valid_at(self.clock.now()) {
                return Ok(entry.token.clone());
            }
            tracing::debug!(expires_at = %entry.expires_at, "Cached access token expired");
        }

        let entry = self.request_token().await?;
        let token = entry.token.clone();
        *cached = Some(entry);
        Ok(token)
    }

    /// Fetch a new token regardless of the cached one's expiry.
    pub(crate) async fn refresh(&self) -> Result<Arc<AccessToken>> {
        let mut cached = self.cached.write().await;
        let entry = self.request_token().await?;
        let token = entry.token.clone();
        *cached = Some(entry);
        Ok(token)
    }

    /// Drop the cached token. The next request fetches a new one.
    pub(crate) async fn invalidate(&self) {
        self.cached.write().await.take();
    }

    /// Instant at which the cached token stops being used, if any.
    pub(crate) async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.cached.read().await.as_ref().map(|entry| entry.expires_at)
    }

    /// Expiry instant for a token received at `received_at`. This is the
    /// only place the padding is applied.
    ///
    /// A lifetime that is not longer than the padding yields `received_at`,
    /// so the token is already expired. Only a positive overflow saturates.
    fn expiry_for(&self, received_at: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
        if expires_in <= 0 {
            return received_at;
        }
        match Duration::try_seconds(expires_in).and_then(|lifetime| lifetime.checked_sub(&self.padding)) {
            Some(remaining) if remaining > Duration::zero() => received_at
                .checked_add_signed(remaining)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            Some(_) => received_at,
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    async fn request_token(&self) -> Result<CachedToken> {
        let headers = request::token_headers(&self.credentials, &self.accept_language)?;

        tracing::debug!(url = %self.token_url, "Requesting access token");

        let response = self
            .http
            .post(self.token_url.clone())
            .headers(headers)
            .form(request::TOKEN_FORM)
            .send()
            .await
            .map_err(Error::from_transport)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(Error::from_transport)?;
        let received_at = self.clock.now();

        let body = StatusPolicy::TOKEN.check(status, body).map_err(|err| {
            tracing::warn!(status, "Access token request failed");
            err
        })?;

        let token = AccessToken::from(serde_json::from_str::<TokenResponse>(&body)?);
        let expires_at = self.expiry_for(received_at, token.expires_in);

        if expires_at <= received_at {
            tracing::warn!(
                expires_in = token.expires_in,
                "Access token lifetime is shorter than the expiry padding"
            );
        }
        tracing::info!(%expires_at, app_id = ?token.app_id, "Obtained new access token");

        Ok(CachedToken {
            token: Arc::new(token),
            expires_at,
        })
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("token_url", &self.token_url.as_str())
            .field("credentials", &self.credentials)
            .field("padding", &self.padding)
            .finish()
    }
}
