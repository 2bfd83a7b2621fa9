//! OAuth2 client credentials.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};

/// PayPal REST application credentials.
///
/// The secret is held in a [`SecretString`] and never appears in `Debug`
/// output.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Create credentials from a client ID and secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
        }
    }

    /// The client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Base64 of `client_id:client_secret`, as used in a Basic
    /// `Authorization` header. The output is a single line.
    pub(crate) fn basic_authorization(&self) -> String {
        BASE64.encode(format!(
            "{}:{}",
            self.client_id,
            self.client_secret.expose_secret()
        ))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}
