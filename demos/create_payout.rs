//! Create a payout and look it up again.
//!
//! This example sends a small sandbox payout and then fetches the payout
//! item by its ID.
//!
//! Run with:
//! PAYPAL_CLIENT_ID=... PAYPAL_CLIENT_SECRET=... cargo run --example create_payout -- receiver@example.com

use paypal_payouts_rs::models::{PayoutItemBuilder, RecipientType, SenderBatchHeader};
use paypal_payouts_rs::PayoutClient;
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> paypal_payouts_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let receiver = std::env::args()
        .nth(1)
        .expect("usage: create_payout <receiver-email>");

    // Reads PAYPAL_MODE (default sandbox), PAYPAL_CLIENT_ID and PAYPAL_CLIENT_SECRET
    let client = PayoutClient::from_env()?;
    println!("Connecting to PayPal {}...", client.environment());

    let item = PayoutItemBuilder::new()
        .recipient_type(RecipientType::Email)
        .receiver(receiver)
        .amount(dec!(1.00), "USD")
        .note("Test payout from paypal-payouts-rs")
        .build()?;

    let header = SenderBatchHeader::new().with_email_subject("Test payout");
    let payout = client.payouts().create(&item, Some(header)).await?;

    println!("Created payout item {}", payout.payout_item_id);
    println!("  Status: {:?}", payout.transaction_status);
    if let Some(fee) = &payout.payout_item_fee {
        println!("  Fee: {} {}", fee.value, fee.currency);
    }
    if let Some(batch) = &payout.batch_header {
        println!("  Batch: {} ({:?})", batch.payout_batch_id, batch.batch_status);
    }

    let latest = client.payouts().get(&payout.payout_item_id).await?;
    println!("\nLookup status: {:?}", latest.transaction_status);
    for link in &latest.links {
        println!("  {} -> {}", link.rel, link.href);
    }

    println!("\nDone!");
    Ok(())
}
