//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configured API base URL is invalid or malformed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A resource link (e.g. a homeworld URL) is not a valid URL.
    #[error("invalid resource URL: {0}")]
    InvalidResourceUrl(String),

    /// The page size must be strictly positive.
    #[error("invalid page size: {0}")]
    InvalidPageSize(u32),

    /// The list request could not be encoded as a query string.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
