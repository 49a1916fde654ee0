//! Asynchronous droplet client implementation.

use crate::models::{Droplet, Envelope};
use crate::Result;
use do_core::client::{ClientConfig, DEFAULT_ENDPOINT};
use do_core::credentials::Credentials;
use do_core::transport::{HttpTransport, Transport};
use do_core::Error;
use std::sync::Arc;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("do-droplets/", env!("CARGO_PKG_VERSION"));

/// Builder for [`DropletClient`].
pub struct DropletClientBuilder {
    credentials: Credentials,
    endpoint: String,
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl DropletClientBuilder {
    /// Create a builder from the account's API Access credentials.
    ///
    /// The strings are not validated; empty credentials are accepted and
    /// rejected by the provider at call time.
    #[must_use]
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(client_id, api_key),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config: ClientConfig::new(),
            transport: None,
        }
    }

    /// Override the base endpoint (tests, regional mirrors).
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Inject a custom transport, bypassing HTTP client construction.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client. The transport is constructed here, once, and is
    /// reused for every call over the client's lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] if the endpoint is not a valid URL
    /// or the HTTP client cannot be constructed.
    pub fn build(self) -> Result<DropletClient> {
        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let mut config = self.config;
                if config.user_agent.is_none() {
                    config.user_agent = Some(USER_AGENT.to_string());
                }
                let base_url = Url::parse(&self.endpoint)?;
                Arc::new(HttpTransport::new(base_url, self.credentials, &config)?)
            }
        };

        Ok(DropletClient { transport })
    }
}

/// Asynchronous client for droplet lifecycle control.
///
/// Each operation is a single awaited GET round trip: no retries, no
/// caching, no internal concurrency. The client is cheap to clone and safe
/// to share across tasks; concurrent calls reuse the one shared transport.
#[derive(Clone)]
pub struct DropletClient {
    transport: Arc<dyn Transport>,
}

impl DropletClient {
    /// Construct a client with the default endpoint and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RequestFailed`] if the HTTP client cannot be
    /// constructed.
    pub fn new(client_id: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        DropletClientBuilder::new(client_id, api_key).build()
    }

    /// List all droplets on the account, in the provider's order.
    pub async fn list_droplets(&self) -> Result<Vec<Droplet>> {
        let envelope = self.fetch("droplets").await?.ensure_ok()?;
        envelope
            .droplets
            .ok_or_else(|| missing_payload("droplets", "droplets"))
    }

    /// Fetch a single droplet by identifier.
    pub async fn get_droplet(&self, droplet_id: &str) -> Result<Droplet> {
        let path = format!("droplets/{droplet_id}");
        let envelope = self.fetch(&path).await?.ensure_ok()?;
        envelope
            .droplet
            .ok_or_else(|| missing_payload(&path, "droplet"))
    }

    /// Reboot a droplet.
    pub async fn reboot_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "reboot").await
    }

    /// Power-cycle a droplet (hard off, then on).
    pub async fn power_cycle_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "power_cycle").await
    }

    /// Shut a droplet down gracefully.
    pub async fn shutdown_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "shutdown").await
    }

    /// Power a droplet off.
    pub async fn power_off_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "power_off").await
    }

    /// Power a droplet on.
    pub async fn power_on_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "power_on").await
    }

    /// Destroy a droplet. This cannot be undone, and calling it twice
    /// issues two independent destructive requests.
    pub async fn destroy_droplet(&self, droplet_id: &str) -> Result<bool> {
        self.droplet_action(droplet_id, "destroy").await
    }

    async fn droplet_action(&self, droplet_id: &str, action: &str) -> Result<bool> {
        let path = format!("droplets/{droplet_id}/{action}");
        let envelope = self.fetch(&path).await?.ensure_ok()?;
        // `ensure_ok` already rejected the ERROR envelope, so this mirrors
        // the status flag and cannot be false here.
        Ok(envelope.status.is_ok())
    }

    async fn fetch(&self, path: &str) -> Result<Envelope> {
        let body = self.transport.get(path).await?;
        let envelope: Envelope = serde_json::from_value(body).map_err(|err| {
            Error::RequestFailed(format!("unexpected envelope for `{path}`: {err}"))
        })?;
        debug!(%path, status = ?envelope.status, "decoded API envelope");
        Ok(envelope)
    }
}

fn missing_payload(path: &str, field: &str) -> Error {
    Error::RequestFailed(format!("OK response for `{path}` is missing `{field}`"))
}
