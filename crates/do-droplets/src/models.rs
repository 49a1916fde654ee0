//! Droplet API response models.
//!
//! Every v1 response is a JSON envelope carrying a `status` flag, an
//! optional `description` (present on error), and an operation-specific
//! payload key. Droplet records themselves are not modeled: the provider's
//! schema is passed through unchanged as a JSON mapping for the caller to
//! interpret.

use do_core::{Error, Result};
use serde::Deserialize;

/// A droplet record as returned by the provider, passed through verbatim.
pub type Droplet = serde_json::Map<String, serde_json::Value>;

/// The `status` flag carried by every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ApiStatus {
    /// The request was accepted and the payload fields are usable.
    #[serde(rename = "OK")]
    Ok,
    /// The request was rejected; `description` explains why.
    #[serde(rename = "ERROR")]
    Error,
}

impl ApiStatus {
    /// Returns true for [`ApiStatus::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// The JSON wrapper object returned by every v1 API call.
///
/// Transient: decoded, inspected, and discarded within a single call.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Outcome flag, `"OK"` or `"ERROR"`.
    pub status: ApiStatus,

    /// Provider error text, present when `status` is `"ERROR"`.
    #[serde(default)]
    pub description: Option<String>,

    /// List payload, present on success of the list operation.
    #[serde(default)]
    pub droplets: Option<Vec<Droplet>>,

    /// Single-record payload, present on success of the get operation.
    #[serde(default)]
    pub droplet: Option<Droplet>,
}

impl Envelope {
    /// Reject an `"ERROR"` envelope, passing an `"OK"` one through.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiError`] carrying the provider's `description`
    /// verbatim (empty when the provider omitted it).
    pub fn ensure_ok(self) -> Result<Self> {
        match self.status {
            ApiStatus::Ok => Ok(self),
            ApiStatus::Error => Err(Error::ApiError(self.description.unwrap_or_default())),
        }
    }
}
