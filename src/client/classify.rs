//! Per-endpoint classification of HTTP status codes.

use crate::{Error, Result};

/// How a response status is interpreted for a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Success,
    BadRequest,
    NotFound,
    Failure,
}

/// Expected status codes of one endpoint. Any status not listed is a
/// generic failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StatusPolicy {
    success: u16,
    bad_request: Option<u16>,
    not_found: Option<u16>,
}

impl StatusPolicy {
    /// `POST /v1/oauth2/token`
    pub(crate) const TOKEN: Self = Self {
        success: 200,
        bad_request: Some(401),
        not_found: None,
    };

    /// `POST /v1/payments/payouts`
    pub(crate) const CREATE_PAYOUT: Self = Self {
        success: 201,
        bad_request: Some(400),
        not_found: None,
    };

    /// `GET /v1/payments/payouts-item/{id}`
    pub(crate) const GET_PAYOUT: Self = Self {
        success: 200,
        bad_request: None,
        not_found: Some(404),
    };

    pub(crate) fn outcome(&self, status: u16) -> Outcome {
        if status == self.success {
            Outcome::Success
        } else if self.bad_request == Some(status) {
            Outcome::BadRequest
        } else if self.not_found == Some(status) {
            Outcome::NotFound
        } else {
            Outcome::Failure
        }
    }

    /// Pass the body through on success, otherwise turn it into the
    /// matching error.
    pub(crate) fn check(&self, status: u16, body: String) -> Result<String> {
        match self.outcome(status) {
            Outcome::Success => Ok(body),
            Outcome::BadRequest => Err(Error::BadRequest { status, body }),
            Outcome::NotFound => Err(Error::NotFound { body }),
            Outcome::Failure => Err(Error::Api { status, body }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_policy() {
        let policy = StatusPolicy::TOKEN;
        assert_eq!(policy.outcome(200), Outcome::Success);
        assert_eq!(policy.outcome(401), Outcome::BadRequest);
        assert_eq!(policy.outcome(400), Outcome::Failure);
        assert_eq!(policy.outcome(404), Outcome::Failure);
    }

    #[test]
    fn test_create_payout_policy() {
        let policy = StatusPolicy::CREATE_PAYOUT;
        assert_eq!(policy.outcome(201), Outcome::Success);
        // Only the documented success code counts.
        assert_eq!(policy.outcome(200), Outcome::Failure);
        assert_eq!(policy.outcome(400), Outcome::BadRequest);
        assert_eq!(policy.outcome(401), Outcome::Failure);
    }

    #[test]
    fn test_get_payout_policy() {
        let policy = StatusPolicy::GET_PAYOUT;
        assert_eq!(policy.outcome(200), Outcome::Success);
        assert_eq!(policy.outcome(404), Outcome::NotFound);
        assert_eq!(policy.outcome(400), Outcome::Failure);
    }

    #[test]
    fn test_check_carries_raw_body() {
        let body = "{\"name\":\"VALIDATION_ERROR\"}".to_string();
        match StatusPolicy::CREATE_PAYOUT.check(400, body.clone()) {
            Err(Error::BadRequest { status, body: raw }) => {
                assert_eq!(status, 400);
                assert_eq!(raw, body);
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        match StatusPolicy::GET_PAYOUT.check(500, String::new()) {
            Err(err @ Error::Api { .. }) => {
                assert_eq!(err.to_string(), "HTTP Status: 500 | HTTP Body: ");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }

        assert_eq!(
            StatusPolicy::GET_PAYOUT.check(200, "{}".into()).unwrap(),
            "{}"
        );
    }
}
