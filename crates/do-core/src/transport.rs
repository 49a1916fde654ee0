//! The HTTP transport seam.
//!
//! Service crates talk to the API exclusively through the [`Transport`]
//! trait, which reduces the wire contract to `get(path) -> JSON body`.
//! [`HttpTransport`] is the production implementation over `reqwest`; tests
//! substitute doubles.

use crate::client::ClientConfig;
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// A synchronous-per-call GET transport against the provider endpoint.
///
/// Implementations must be safe for concurrent use from multiple tasks; the
/// client issues no internal concurrency but callers may parallelize.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request for `path` (relative to the base endpoint) and
    /// return the parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] when the exchange cannot be
    /// completed: connection failure, non-success HTTP status, or a body
    /// that is not valid JSON.
    async fn get(&self, path: &str) -> Result<serde_json::Value>;
}

/// Production [`Transport`] backed by a shared `reqwest::Client`.
///
/// Exactly one instance exists per API client, constructed eagerly so that
/// concurrent first use cannot race. The inner `reqwest::Client` is
/// internally reference-counted and thread-safe, so `HttpTransport` may be
/// shared freely behind an `Arc`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl HttpTransport {
    /// Create a transport for `base_url` authenticating with `credentials`.
    ///
    /// The base URL path is normalized to end with `/` so that request paths
    /// resolve underneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] if the underlying HTTP client cannot
    /// be constructed from `config`.
    pub fn new(mut base_url: Url, credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Return the base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn request_url(&self, path: &str) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        url.query_pairs_mut()
            .extend_pairs(self.credentials.query_pairs());
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<serde_json::Value> {
        let url = self.request_url(path)?;

        // Log the path only; the full URL carries the API key.
        debug!(%path, "dispatching GET request");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::RequestFailed(format!(
                "HTTP status {status} for `{path}`"
            )));
        }

        response.json::<serde_json::Value>().await.map_err(|err| {
            Error::RequestFailed(format!("malformed response body for `{path}`: {err}"))
        })
    }
}
