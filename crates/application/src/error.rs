//! Application error types

use holocron_domain::DomainError;
use thiserror::Error;

/// Errors raised while fetching from the remote catalog.
///
/// Every variant collapses to the same user-visible load error; the
/// distinction only matters for logs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection, TLS, reading the body).
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The server answered with a non-success status.
    #[error("HTTP status {status}")]
    Http {
        /// Status code received.
        status: u16,
    },

    /// The body did not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] DomainError),
}

impl FetchError {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network(_) => FetchErrorKind::Network,
            Self::Timeout { .. } => FetchErrorKind::Timeout,
            Self::Http { .. } => FetchErrorKind::Http,
            Self::MalformedResponse(_) => FetchErrorKind::MalformedResponse,
            Self::InvalidRequest(_) => FetchErrorKind::InvalidRequest,
        }
    }
}

/// Categories of fetch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchErrorKind {
    /// Transport failure.
    Network,
    /// Timed out.
    Timeout,
    /// Non-success status.
    Http,
    /// Unexpected body shape.
    MalformedResponse,
    /// Request could not be built.
    InvalidRequest,
}

impl FetchErrorKind {
    /// Returns a human-readable title for this error type.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Network => "Network Error",
            Self::Timeout => "Request Timeout",
            Self::Http => "HTTP Error",
            Self::MalformedResponse => "Malformed Response",
            Self::InvalidRequest => "Invalid Request",
        }
    }
}

/// Errors returned by a synchronization cycle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SyncError {
    /// The fetch failed; the previous result page is still displayed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A newer request or keystroke superseded this one; its outcome was
    /// dropped.
    #[error("superseded by a newer request")]
    Superseded,
}
