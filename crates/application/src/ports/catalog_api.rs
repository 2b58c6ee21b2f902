//! Catalog API port

use async_trait::async_trait;
use holocron_domain::{ListRequest, ListResponse, Record};

use crate::error::FetchError;

/// Port for the remote character catalog.
///
/// Each call issues exactly one request; implementations do not retry.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of the character list.
    ///
    /// # Errors
    ///
    /// Returns a `FetchError` on transport failure, timeout, a non-success
    /// status or an unexpected body.
    async fn list_people(&self, request: &ListRequest) -> Result<ListResponse, FetchError>;

    /// Fetches the species list used for the filter options.
    ///
    /// # Errors
    ///
    /// Same conditions as `list_people`.
    async fn list_species(&self) -> Result<Vec<Record>, FetchError>;

    /// Fetches a single resource by its URL (e.g. a homeworld).
    ///
    /// # Errors
    ///
    /// Same conditions as `list_people`; a body that is not a JSON object is
    /// malformed.
    async fn fetch_record(&self, url: &str) -> Result<Record, FetchError>;
}
