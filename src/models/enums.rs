//! Enumeration types for the PayPal Payouts API.

use serde::{Deserialize, Serialize};

/// How the payout receiver is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipientType {
    /// Receiver is an email address
    #[default]
    Email,
    /// Receiver is a mobile phone number
    Phone,
    /// Receiver is an encrypted PayPal account number
    PaypalId,
    /// Unknown recipient type
    #[serde(other)]
    Unknown,
}

/// Status of a single payout item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    /// Funds have been credited to the recipient's account
    Success,
    /// The item failed
    Failed,
    /// Awaiting processing
    Pending,
    /// Recipient has no PayPal account; funds are held for 30 days
    Unclaimed,
    /// Unclaimed funds were returned to the sender
    Returned,
    /// The item is on hold
    Onhold,
    /// The item was blocked
    Blocked,
    /// Refunded to the sender
    Refunded,
    /// Reversed
    Reversed,
    /// Unknown transaction status
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Returns `true` if no further status change is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Success
                | TransactionStatus::Failed
                | TransactionStatus::Returned
                | TransactionStatus::Refunded
                | TransactionStatus::Reversed
                | TransactionStatus::Blocked
        )
    }
}

/// Status of a payout batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    /// The batch was denied
    Denied,
    /// Waiting to be processed
    Pending,
    /// Being processed
    Processing,
    /// All items processed
    Success,
    /// The batch was canceled
    Canceled,
    /// Unknown batch status
    #[serde(other)]
    Unknown,
}
