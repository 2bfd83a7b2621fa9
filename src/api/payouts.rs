//! Payouts service for creating and looking up single payouts.

use std::sync::Arc;

use crate::client::classify::StatusPolicy;
use crate::client::request::{PAYOUTS_PATH, PAYOUT_ITEM_PATH, SYNC_MODE};
use crate::client::ClientInner;
use crate::models::{
    CreatePayoutRequest, Payout, PayoutBatchResponse, PayoutItem, PayoutItemId, SenderBatchHeader,
};
use crate::{Error, Result};

/// Service for payout operations.
///
/// # Example
///
/// ```no_run
/// use paypal_payouts_rs::models::{PayoutItemBuilder, RecipientType, SenderBatchHeader};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: paypal_payouts_rs::PayoutClient) -> paypal_payouts_rs::Result<()> {
/// let item = PayoutItemBuilder::new()
///     .recipient_type(RecipientType::Email)
///     .receiver("michael@bluth.com")
///     .amount(dec!(12.57), "USD")
///     .sender_item_id("123456789")
///     .build()?;
///
/// let header = SenderBatchHeader::new().with_email_subject("Gobias Industries Payment");
/// let payout = client.payouts().create(&item, Some(header)).await?;
///
/// // Look the item up again later
/// let latest = client.payouts().get(&payout.payout_item_id).await?;
/// println!("Status: {:?}", latest.transaction_status);
/// # Ok(())
/// # }
/// ```
pub struct PayoutsService {
    inner: Arc<ClientInner>,
}

impl PayoutsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a payout to a single receiver.
    ///
    /// The item is sent as a one-item batch processed synchronously. Fields
    /// set on `header` override the defaults; without an email subject the
    /// receiver sees [`DEFAULT_EMAIL_SUBJECT`](crate::models::DEFAULT_EMAIL_SUBJECT).
    ///
    /// The returned [`Payout`] is the batch's item with the batch links
    /// appended to its own and the batch header attached.
    ///
    /// # Errors
    ///
    /// - [`Error::BadRequest`] if PayPal rejects the payout as invalid (400)
    /// - [`Error::Api`] for any other non-201 response
    pub async fn create(
        &self,
        item: &PayoutItem,
        header: Option<SenderBatchHeader>,
    ) -> Result<Payout> {
        let request = CreatePayoutRequest {
            items: std::slice::from_ref(item),
            sender_batch_header: header.unwrap_or_default().merged_with_defaults(),
        };

        let batch: PayoutBatchResponse = self
            .inner
            .post(PAYOUTS_PATH, SYNC_MODE, &request, StatusPolicy::CREATE_PAYOUT)
            .await?;

        let payout = batch.into_single_payout()?;
        tracing::info!(
            payout_item_id = %payout.payout_item_id,
            payout_batch_id = %payout.payout_batch_id,
            status = ?payout.transaction_status,
            "Payout created"
        );
        Ok(payout)
    }

    /// Get a payout item by ID.
    ///
    /// The result never carries a `batch_header`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `id` is empty
    /// - [`Error::NotFound`] if no such item exists (404)
    /// - [`Error::Api`] for any other non-200 response
    pub async fn get(&self, id: &PayoutItemId) -> Result<Payout> {
        if id.as_str().trim().is_empty() {
            return Err(Error::InvalidInput(
                "payout item ID must not be empty".to_string(),
            ));
        }

        let segments: Vec<&str> = PAYOUT_ITEM_PATH
            .iter()
            .copied()
            .chain([id.as_str()])
            .collect();

        self.inner.get(&segments, StatusPolicy::GET_PAYOUT).await
    }
}
