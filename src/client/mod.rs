//! HTTP client and request dispatch for the PayPal Payouts API.
//!
//! This module provides the main entry point [`PayoutClient`]. Requests
//! are authorized with a token from the token cache and their responses
//! classified per endpoint before decoding.
//!
//! # Example
//!
//! ```no_run
//! use paypal_payouts_rs::PayoutClient;
//!
//! # async fn example() -> paypal_payouts_rs::Result<()> {
//! let client = PayoutClient::from_env()?;
//! let token = client.token().await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod classify;
mod config;
mod http;
pub(crate) mod request;

pub use config::{ClientConfig, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_MODE};
pub use http::PayoutClient;
pub(crate) use http::ClientInner;
