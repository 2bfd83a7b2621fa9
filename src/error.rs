//! Error types for the PayPal Payouts client.
//!
//! Upstream HTTP failures are classified per endpoint into
//! [`Error::BadRequest`], [`Error::NotFound`] or the catch-all
//! [`Error::Api`]. All three carry the raw response body verbatim.
//! Transport failures are reported separately as [`Error::Http`] or
//! [`Error::Timeout`].

use thiserror::Error;

/// A specialized `Result` type for payout operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all PayPal Payouts operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (connection refused, DNS, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timed out
    #[error("Request timeout")]
    Timeout,

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request was rejected as malformed or unauthorized
    /// (upstream 400 on create, 401 on token).
    #[error("{body}")]
    BadRequest {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The requested resource does not exist (upstream 404 on lookup).
    #[error("{body}")]
    NotFound {
        /// Raw response body
        body: String,
    },

    /// Any other non-success response.
    #[error("HTTP Status: {status} | HTTP Body: {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response decoded but did not have the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use paypal_payouts_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) | Error::Timeout => true,
            Error::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if the request never produced an HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Timeout)
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::BadRequest { .. } | Error::NotFound { .. } => true,
            Error::Api { status, .. } => (400..500).contains(status),
            Error::InvalidInput(_) | Error::Config(_) => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The upstream HTTP status code, if the error came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BadRequest { status, .. } | Error::Api { status, .. } => Some(*status),
            Error::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// The raw upstream response body, if the error came from a response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::BadRequest { body, .. }
            | Error::NotFound { body }
            | Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Classify a transport error, splitting out timeouts.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_error_message() {
        let err = Error::Api {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP Status: 500 | HTTP Body: ");

        let err = Error::Api {
            status: 503,
            body: "{\"name\":\"SERVICE_UNAVAILABLE\"}".into(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP Status: 503 | HTTP Body: {\"name\":\"SERVICE_UNAVAILABLE\"}"
        );
    }

    #[test]
    fn test_classified_errors_display_raw_body() {
        let body = "{\"name\":\"VALIDATION_ERROR\"}";
        let err = Error::BadRequest {
            status: 400,
            body: body.into(),
        };
        assert_eq!(err.to_string(), body);

        let err = Error::NotFound {
            body: "{\"name\":\"INVALID_RESOURCE_ID\"}".into(),
        };
        assert_eq!(err.to_string(), "{\"name\":\"INVALID_RESOURCE_ID\"}");
    }

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::Api { status: 503, body: String::new() }.is_retryable());
        assert!(!Error::BadRequest { status: 400, body: String::new() }.is_retryable());
        assert!(!Error::InvalidInput("bad".into()).is_retryable());
    }

    #[test]
    fn test_status_and_body() {
        let err = Error::NotFound { body: "{}".into() };
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.body(), Some("{}"));
        assert!(err.is_client_error());

        assert_eq!(Error::Timeout.status(), None);
        assert!(Error::Timeout.is_transport());
        assert!(Error::Api { status: 502, body: String::new() }.is_server_error());
    }
}
