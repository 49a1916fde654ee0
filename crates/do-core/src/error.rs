//! Error types for DigitalOcean API operations.
//!
//! Every failure surfaces as one of two kinds: the HTTP exchange itself did
//! not complete ([`Error::RequestFailed`]), or the exchange completed but the
//! API envelope reported `status == "ERROR"` ([`Error::ApiError`]). Callers
//! can branch on the variant; nothing is retried or swallowed internally.

use thiserror::Error;

/// Main error type for DigitalOcean API operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The transport could not complete the HTTP exchange: connection
    /// failure, non-success HTTP status, or an unparsable response body.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The API answered with `status: "ERROR"`; carries the provider's
    /// `description` text verbatim.
    #[error("the API returned status ERROR: {0}")]
    ApiError(String),
}

/// Specialized result type for DigitalOcean API operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::RequestFailed(_) => "REQUEST_FAILED",
            Self::ApiError(_) => "API_ERROR",
        }
    }

    /// Returns true if the failure happened below the API envelope, i.e. the
    /// provider's answer (if any) was never interpreted.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}

// Conversions from external error types. All of these occur before an
// envelope could be inspected, so they fold into the transport-level kind.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::RequestFailed(format!("invalid endpoint: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::RequestFailed(format!("malformed response body: {err}"))
    }
}
