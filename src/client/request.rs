//! Request building: endpoint URLs and headers.
//!
//! Everything here is a pure function of its inputs.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE,
};
use secrecy::ExposeSecret;
use url::Url;

use crate::auth::{AccessToken, Credentials};
use crate::{Error, Result};

pub(crate) const APPLICATION_JSON: &str = "application/json";
pub(crate) const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub(crate) const DEFAULT_ACCEPT_LANGUAGE: &str = "en_US";

pub(crate) const TOKEN_PATH: &[&str] = &["v1", "oauth2", "token"];
pub(crate) const PAYOUTS_PATH: &[&str] = &["v1", "payments", "payouts"];
pub(crate) const PAYOUT_ITEM_PATH: &[&str] = &["v1", "payments", "payouts-item"];

/// Asks the create endpoint to process the batch before responding.
pub(crate) const SYNC_MODE: &[(&str, &str)] = &[("sync_mode", "true")];

/// Form body of the client-credentials token request.
pub(crate) const TOKEN_FORM: &[(&str, &str)] = &[
    ("grant_type", "client_credentials"),
    ("response_type", "token"),
];

/// Join `segments` onto `base` (each percent-encoded as one path segment)
/// and append `query`.
pub(crate) fn endpoint_url(base: &Url, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| Error::Config(format!("Base URL cannot have a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// Headers for JSON API requests authorized with a bearer token.
pub(crate) fn json_headers(token: &AccessToken, accept_language: &str) -> Result<HeaderMap> {
    let mut headers = base_headers(APPLICATION_JSON, accept_language)?;

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.secret().expose_secret()))
        .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}

/// Headers for the token request, authorized with HTTP Basic credentials.
pub(crate) fn token_headers(credentials: &Credentials, accept_language: &str) -> Result<HeaderMap> {
    let mut headers = base_headers(FORM_URLENCODED, accept_language)?;

    let mut auth = HeaderValue::from_str(&format!("Basic {}", credentials.basic_authorization()))
        .map_err(|_| Error::Config("Client credentials are not valid header text".to_string()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);

    Ok(headers)
}

fn base_headers(content_type: &'static str, accept_language: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(accept_language)
            .map_err(|_| Error::Config(format!("Invalid Accept-Language: {}", accept_language)))?,
    );
    Ok(headers)
}
