//! Authentication for the PayPal REST API.
//!
//! PayPal uses the OAuth2 client-credentials grant: the client ID and
//! secret are exchanged for a short-lived bearer token (typically valid
//! for several hours). The client caches that token and requests a new
//! one only once it has expired.
//!
//! ```no_run
//! use paypal_payouts_rs::{ClientConfig, Environment, PayoutClient};
//!
//! # async fn example() -> paypal_payouts_rs::Result<()> {
//! let client = PayoutClient::new(ClientConfig::new(
//!     Environment::Sandbox,
//!     "your-client-id",
//!     "your-client-secret",
//! ))?;
//!
//! let token = client.token().await?;
//! println!("Token valid for {}s", token.expires_in);
//! # Ok(())
//! # }
//! ```

mod credentials;
pub(crate) mod token;

pub use credentials::Credentials;
pub use token::{AccessToken, Clock, SystemClock, DEFAULT_EXPIRY_PADDING_SECS};
pub(crate) use token::TokenManager;
