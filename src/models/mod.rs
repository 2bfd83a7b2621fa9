//! Data models for the PayPal Payouts API.
//!
//! - [`primitives`] - Identifiers and the [`Environment`]
//! - [`enums`] - Recipient types and status codes
//! - [`payout`] - Payout requests, results and batch headers

pub mod primitives;
pub mod enums;
pub mod payout;

// Re-export commonly used types
pub use primitives::*;
pub use enums::*;
pub use payout::{
    Amount, Link, Payout, PayoutBatchHeader, PayoutItem, PayoutItemBuilder, SenderBatchHeader,
    DEFAULT_EMAIL_SUBJECT,
};
pub(crate) use payout::{CreatePayoutRequest, PayoutBatchResponse};
