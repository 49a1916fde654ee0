//! Credential handling for the legacy query-parameter authentication scheme.
//!
//! The v1 API authenticates every request with two query parameters,
//! `client_id` and `api_key`, taken from the account's API Access settings.
//! The pair is immutable once the client is constructed and is never
//! serialized by this crate.

use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// The immutable `client_id` / `api_key` pair.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    api_key: SecretString,
}

impl Credentials {
    /// Create a new credential pair.
    ///
    /// No validation is performed; empty strings are accepted and will be
    /// rejected by the provider at call time.
    #[must_use]
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the account-level client identifier.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Produce the query pairs attached to every request.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("client_id", self.client_id.as_str()),
            ("api_key", self.api_key.expose_secret()),
        ]
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
