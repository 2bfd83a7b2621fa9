//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! so payout item IDs and batch IDs cannot be mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A strongly-typed payout item ID (e.g. `"P3FKTDYE3DHMG"`).
///
/// # Example
///
/// ```
/// use paypal_payouts_rs::PayoutItemId;
///
/// let id = PayoutItemId::new("P3FKTDYE3DHMG");
/// println!("Payout item: {}", id);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutItemId(String);

impl PayoutItemId {
    /// Create a new payout item ID from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the payout item ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayoutItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PayoutItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PayoutItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PayoutItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A strongly-typed payout batch ID (e.g. `"PQT78VW24P758"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutBatchId(String);

impl PayoutBatchId {
    /// Create a new payout batch ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the batch ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PayoutBatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PayoutBatchId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PayoutBatchId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Environment configuration for the PayPal API.
///
/// Determines which API host to use - live or sandbox.
///
/// # Example
///
/// ```
/// use paypal_payouts_rs::Environment;
///
/// let env: Environment = "live".parse().unwrap();
/// assert_eq!(env.api_base_url(), "https://api.paypal.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Sandbox environment for testing with fake money.
    #[default]
    Sandbox,
    /// Live environment - real payouts with real money.
    Live,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.paypal.com",
            Environment::Live => "https://api.paypal.com",
        }
    }

    /// Returns `true` if this is the live environment.
    pub fn is_live(&self) -> bool {
        matches!(self, Environment::Live)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Live => write!(f, "live"),
        }
    }
}

impl FromStr for Environment {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "live" => Ok(Environment::Live),
            other => Err(crate::Error::Config(format!(
                "Unknown environment: {}. Expected \"sandbox\" or \"live\"",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_item_id() {
        let id = PayoutItemId::new("P3FKTDYE3DHMG");
        assert_eq!(id.as_str(), "P3FKTDYE3DHMG");
        assert_eq!(id.to_string(), "P3FKTDYE3DHMG");
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

    #[test]
    fn test_environment_parse() {
        assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
        assert_eq!(" LIVE ".parse::<Environment>().unwrap(), Environment::Live);
        assert!("production".parse::<Environment>().is_err());
    }

    #[test]
    fn test_environment_default_is_sandbox() {
        assert!(Environment::default().is_sandbox());
        assert_eq!(Environment::Live.to_string(), "live");
    }
}
