//! API service modules for PayPal endpoints.

mod payouts;

pub use payouts::PayoutsService;
