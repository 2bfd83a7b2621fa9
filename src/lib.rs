//! # paypal-payouts-rs
//!
//! An async Rust client for the PayPal Payouts REST API.
//!
//! The client authenticates with the OAuth2 client-credentials grant,
//! creates single-item payouts and looks payout items up by ID.
//!
//! ## Features
//!
//! - **Token caching**: one token request per token lifetime, shared by
//!   concurrent callers
//! - **Typed results**: create and lookup both return [`models::Payout`];
//!   create results additionally carry the batch header
//! - **Classified errors**: validation failures, missing resources and
//!   other upstream failures are distinct [`Error`] variants carrying the
//!   raw response body
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_payouts_rs::{ClientConfig, Environment, PayoutClient};
//! use paypal_payouts_rs::models::{PayoutItemBuilder, RecipientType};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> paypal_payouts_rs::Result<()> {
//!     let client = PayoutClient::new(ClientConfig::new(
//!         Environment::Sandbox,
//!         "client-id",
//!         "client-secret",
//!     ))?;
//!
//!     let item = PayoutItemBuilder::new()
//!         .recipient_type(RecipientType::Email)
//!         .receiver("michael@bluth.com")
//!         .amount(dec!(12.57), "USD")
//!         .note("Thank you for shopping at Gobias Industries")
//!         .build()?;
//!
//!     let payout = client.payouts().create(&item, None).await?;
//!     println!("Created {} ({:?})", payout.payout_item_id, payout.transaction_status);
//!
//!     let batch = payout.batch_header.expect("create results carry a batch header");
//!     println!("Batch {}", batch.payout_batch_id);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{Error, Result};
pub use models::{Environment, PayoutBatchId, PayoutItemId};
pub use client::{ClientConfig, PayoutClient};
pub use auth::{AccessToken, Clock, Credentials, SystemClock};

/// Prelude module for convenient imports.
///
/// ```rust
/// use paypal_payouts_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        // Primitives
        Environment, PayoutBatchId, PayoutItemId,
        // Enums
        BatchStatus, RecipientType, TransactionStatus,
        // Payout models
        Amount, Link, Payout, PayoutBatchHeader, PayoutItem, PayoutItemBuilder,
        SenderBatchHeader,
    };
    pub use crate::client::{ClientConfig, PayoutClient};
    pub use crate::auth::{AccessToken, Clock, Credentials, SystemClock};
    pub use crate::api::PayoutsService;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_item_id_creation() {
        let id = PayoutItemId::new("P3FKTDYE3DHMG");
        assert_eq!(id.as_str(), "P3FKTDYE3DHMG");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Live.api_base_url(),
            "https://api.paypal.com"
        );
        assert_eq!(
            Environment::Sandbox.api_base_url(),
            "https://api.sandbox.paypal.com"
        );
    }
}
