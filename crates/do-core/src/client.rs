//! HTTP client configuration.
//!
//! This module holds the provider endpoint constant and the knobs applied to
//! the underlying HTTP client when a transport is constructed.

use std::time::Duration;

/// Base endpoint of the DigitalOcean legacy (v1) API.
///
/// Every request path is resolved against this URL and carries the
/// credential query parameters.
pub const DEFAULT_ENDPOINT: &str = "https://api.digitalocean.com/";

/// HTTP client configuration.
///
/// By default nothing is tuned: no request timeout beyond the transport's
/// own defaults, no retries, no connection tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total request timeout. `None` leaves the transport's default in place.
    pub timeout: Option<Duration>,

    /// User-Agent header override. `None` lets the service crate pick one.
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            timeout: None,
            user_agent: None,
        }
    }

    /// Set a total request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
