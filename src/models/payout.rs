//! Payout request and result models.
//!
//! Create and lookup return the same [`Payout`] shape. Create responses are
//! batch-shaped upstream and are flattened into a single item carrying its
//! [`PayoutBatchHeader`]; lookup responses are item-shaped and never carry
//! one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{BatchStatus, RecipientType, TransactionStatus};
use super::primitives::{PayoutBatchId, PayoutItemId};

/// Email subject used when the caller does not provide one.
pub const DEFAULT_EMAIL_SUBJECT: &str = "You have a payment.";

/// A monetary amount with its ISO-4217 currency code.
///
/// PayPal transmits values as strings; they are parsed into [`Decimal`]
/// and serialized back as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Amount value (e.g. `12.57`)
    pub value: Decimal,
    /// Currency code (e.g. `"USD"`)
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

/// A single payout to send, as submitted by the caller and echoed back by
/// the API inside [`Payout::payout_item`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutItem {
    /// How `receiver` should be interpreted
    pub recipient_type: RecipientType,
    /// Amount to pay out
    pub amount: Amount,
    /// Note shown to the receiver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Email, phone number or PayPal ID of the receiver
    pub receiver: String,
    /// Caller-defined item identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_item_id: Option<String>,
}

/// Builder for [`PayoutItem`] with validation.
///
/// # Example
///
/// ```
/// use paypal_payouts_rs::models::{PayoutItemBuilder, RecipientType};
/// use rust_decimal_macros::dec;
///
/// let item = PayoutItemBuilder::new()
///     .recipient_type(RecipientType::Email)
///     .receiver("michael@bluth.com")
///     .amount(dec!(12.57), "USD")
///     .note("Thank you for shopping at Gobias Industries")
///     .sender_item_id("123456789")
///     .build()
///     .unwrap();
///
/// assert_eq!(item.amount.currency, "USD");
/// ```
#[derive(Debug, Default)]
pub struct PayoutItemBuilder {
    recipient_type: Option<RecipientType>,
    amount: Option<Amount>,
    note: Option<String>,
    receiver: Option<String>,
    sender_item_id: Option<String>,
}

impl PayoutItemBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipient type. Defaults to [`RecipientType::Email`].
    pub fn recipient_type(mut self, recipient_type: RecipientType) -> Self {
        self.recipient_type = Some(recipient_type);
        self
    }

    /// Set the amount and currency.
    pub fn amount(mut self, value: Decimal, currency: impl Into<String>) -> Self {
        self.amount = Some(Amount::new(value, currency));
        self
    }

    /// Set the note shown to the receiver.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Set the receiver.
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Set the caller-defined item ID.
    pub fn sender_item_id(mut self, id: impl Into<String>) -> Self {
        self.sender_item_id = Some(id.into());
        self
    }

    /// Build the payout item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the receiver or amount is
    /// missing, or the currency code is empty.
    pub fn build(self) -> crate::Result<PayoutItem> {
        let receiver = self
            .receiver
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| crate::Error::InvalidInput("receiver is required".to_string()))?;

        let amount = self
            .amount
            .ok_or_else(|| crate::Error::InvalidInput("amount is required".to_string()))?;

        if amount.currency.trim().is_empty() {
            return Err(crate::Error::InvalidInput(
                "amount currency is required".to_string(),
            ));
        }

        Ok(PayoutItem {
            recipient_type: self.recipient_type.unwrap_or_default(),
            amount,
            note: self.note,
            receiver,
            sender_item_id: self.sender_item_id,
        })
    }
}

/// Batch-level options sent with a payout.
///
/// Unset fields are omitted from the request. When creating a payout,
/// an unset `email_subject` falls back to [`DEFAULT_EMAIL_SUBJECT`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderBatchHeader {
    /// Subject of the notification email sent to receivers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_subject: Option<String>,
    /// Body of the notification email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_message: Option<String>,
    /// Caller-defined batch identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_batch_id: Option<String>,
    /// Default recipient type for items in the batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_type: Option<RecipientType>,
}

impl SenderBatchHeader {
    /// Create an empty header.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the email subject.
    pub fn with_email_subject(mut self, subject: impl Into<String>) -> Self {
        self.email_subject = Some(subject.into());
        self
    }

    /// Set the email message.
    pub fn with_email_message(mut self, message: impl Into<String>) -> Self {
        self.email_message = Some(message.into());
        self
    }

    /// Set the sender batch ID.
    pub fn with_sender_batch_id(mut self, id: impl Into<String>) -> Self {
        self.sender_batch_id = Some(id.into());
        self
    }

    /// Fill unset fields from the defaults. Fields already set are kept.
    pub fn merged_with_defaults(mut self) -> Self {
        if self.email_subject.is_none() {
            self.email_subject = Some(DEFAULT_EMAIL_SUBJECT.to_string());
        }
        self
    }
}

/// HATEOAS link returned with payout resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Relation name (e.g. `"self"`, `"batch"`)
    pub rel: String,
    /// HTTP method to use with `href`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Batch summary attached to the result of a created payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoutBatchHeader {
    /// Batch ID
    pub payout_batch_id: PayoutBatchId,
    /// Batch status
    pub batch_status: BatchStatus,
    /// When the batch was created
    #[serde(default)]
    pub time_created: Option<DateTime<Utc>>,
    /// When the batch finished processing
    #[serde(default)]
    pub time_completed: Option<DateTime<Utc>>,
    /// Header as submitted by the sender
    pub sender_batch_header: SenderBatchHeader,
    /// Total amount of the batch
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Total fees of the batch
    #[serde(default)]
    pub fees: Option<Amount>,
}

/// A payout item as seen by the caller.
///
/// `batch_header` is populated by
/// [`PayoutsService::create`](crate::api::PayoutsService::create) and is
/// always `None` on results of
/// [`PayoutsService::get`](crate::api::PayoutsService::get).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Payout item ID
    pub payout_item_id: PayoutItemId,
    /// PayPal transaction ID, once one exists
    #[serde(default)]
    pub transaction_id: Option<String>,
    /// Item status
    #[serde(default)]
    pub transaction_status: Option<TransactionStatus>,
    /// Batch the item belongs to
    pub payout_batch_id: PayoutBatchId,
    /// Fee charged for the item
    #[serde(default)]
    pub payout_item_fee: Option<Amount>,
    /// The item as submitted
    pub payout_item: PayoutItem,
    /// When the item was processed
    #[serde(default)]
    pub time_processed: Option<DateTime<Utc>>,
    /// Error details for failed items
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
    /// Item links, followed by the batch links on create results
    #[serde(default)]
    pub links: Vec<Link>,
    /// Batch summary (create results only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_header: Option<PayoutBatchHeader>,
}

/// Request body for the create-payout endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePayoutRequest<'a> {
    pub items: &'a [PayoutItem],
    pub sender_batch_header: SenderBatchHeader,
}

/// Batch-shaped response of the create-payout endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct PayoutBatchResponse {
    pub batch_header: PayoutBatchHeader,
    #[serde(default)]
    pub items: Vec<Payout>,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl PayoutBatchResponse {
    /// Flatten the batch into its first item, appending the batch links to
    /// the item links and attaching the batch header.
    pub(crate) fn into_single_payout(self) -> crate::Result<Payout> {
        let PayoutBatchResponse {
            batch_header,
            items,
            links,
        } = self;

        let mut payout = items.into_iter().next().ok_or_else(|| {
            crate::Error::UnexpectedResponse(format!(
                "payout batch {} contains no items",
                batch_header.payout_batch_id
            ))
        })?;

        payout.links.extend(links);
        payout.batch_header = Some(batch_header);
        Ok(payout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn batch_json(items: serde_json::Value) -> serde_json::Value {
        json!({
            "batch_header": {
                "payout_batch_id": "PQT78VW24P758",
                "batch_status": "SUCCESS",
                "time_created": "2015-04-29T16:34:13Z",
                "time_completed": "2015-04-29T16:34:15Z",
                "sender_batch_header": { "email_subject": "Gobias Industries Payment" },
                "amount": { "currency": "USD", "value": "12.57" },
                "fees": { "currency": "USD", "value": "0.25" }
            },
            "items": items,
            "links": [
                { "href": "https://api.sandbox.paypal.com/v1/payments/payouts/PQT78VW24P758", "rel": "self", "method": "GET" }
            ]
        })
    }

    fn item_json() -> serde_json::Value {
        json!({
            "payout_item_id": "P3FKTDYE3DHMG",
            "transaction_id": "9XG38325MU8441712",
            "transaction_status": "SUCCESS",
            "payout_batch_id": "PQT78VW24P758",
            "payout_item_fee": { "currency": "USD", "value": "0.25" },
            "payout_item": {
                "recipient_type": "EMAIL",
                "amount": { "currency": "USD", "value": "12.57" },
                "note": "Thank you for shopping at Gobias Industries",
                "receiver": "michael@bluth.com",
                "sender_item_id": "123456789"
            },
            "time_processed": "2015-04-29T16:34:15Z",
            "links": [
                { "href": "https://api.sandbox.paypal.com/v1/payments/payouts-item/P3FKTDYE3DHMG", "rel": "item", "method": "GET" }
            ]
        })
    }

    #[test]
    fn test_batch_flattens_into_first_item() {
        let response: PayoutBatchResponse =
            serde_json::from_value(batch_json(json!([item_json()]))).unwrap();
        let payout = response.into_single_payout().unwrap();

        assert_eq!(payout.payout_item_id.as_str(), "P3FKTDYE3DHMG");
        assert_eq!(payout.links.len(), 2);
        assert_eq!(payout.links[0].rel, "item");
        assert_eq!(payout.links[1].rel, "self");

        let header = payout.batch_header.expect("batch header attached");
        assert_eq!(header.payout_batch_id.as_str(), "PQT78VW24P758");
        assert_eq!(header.fees, Some(Amount::new(dec!(0.25), "USD")));
    }

    #[test]
    fn test_empty_batch_is_unexpected() {
        let response: PayoutBatchResponse =
            serde_json::from_value(batch_json(json!([]))).unwrap();
        let err = response.into_single_payout().unwrap_err();
        assert!(matches!(err, crate::Error::UnexpectedResponse(_)));
    }

    #[test]
    fn test_item_shape_has_no_batch_header() {
        let payout: Payout = serde_json::from_value(item_json()).unwrap();
        assert!(payout.batch_header.is_none());
        assert_eq!(payout.transaction_status, Some(TransactionStatus::Success));
    }

    #[test]
    fn test_amount_serializes_as_string() {
        let amount = Amount::new(dec!(12.57), "USD");
        let value = serde_json::to_value(&amount).unwrap();
        assert_eq!(value, json!({ "value": "12.57", "currency": "USD" }));
    }

    #[test]
    fn test_default_email_subject() {
        let header = SenderBatchHeader::new().merged_with_defaults();
        assert_eq!(header.email_subject.as_deref(), Some(DEFAULT_EMAIL_SUBJECT));

        let header = SenderBatchHeader::new()
            .with_email_subject("Gobias Industries Payment")
            .merged_with_defaults();
        assert_eq!(header.email_subject.as_deref(), Some("Gobias Industries Payment"));
    }

    #[test]
    fn test_header_omits_unset_fields() {
        let value = serde_json::to_value(SenderBatchHeader::new().merged_with_defaults()).unwrap();
        assert_eq!(value, json!({ "email_subject": "You have a payment." }));
    }

    #[test]
    fn test_builder_requires_receiver_and_amount() {
        assert!(PayoutItemBuilder::new().amount(dec!(1), "USD").build().is_err());
        assert!(PayoutItemBuilder::new().receiver("a@b.com").build().is_err());
        assert!(PayoutItemBuilder::new()
            .receiver("a@b.com")
            .amount(dec!(1), "")
            .build()
            .is_err());

        let item = PayoutItemBuilder::new()
            .receiver("a@b.com")
            .amount(dec!(1), "USD")
            .build()
            .unwrap();
        assert_eq!(item.recipient_type, RecipientType::Email);
        assert!(item.note.is_none());
    }
}
