//! Load homeworld use case

use std::sync::Arc;

use holocron_domain::{Homeworld, Record};
use tracing::warn;

use crate::ports::CatalogApi;

/// Resolves the homeworld linked from a character record.
///
/// Returns `None` when the record links no homeworld or the lookup fails;
/// the details view then omits the homeworld fields.
pub struct LoadHomeworld<A: ?Sized> {
    api: Arc<A>,
}

impl<A: CatalogApi + ?Sized> LoadHomeworld<A> {
    /// Creates a new `LoadHomeworld` use case.
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Executes the use case for `record`.
    pub async fn execute(&self, record: &Record) -> Option<Homeworld> {
        let url = record.homeworld_url()?;
        match self.api.fetch_record(url).await {
            Ok(planet) => Some(Homeworld::from_record(&planet)),
            Err(error) => {
                warn!(%error, url, "failed to load homeworld");
                None
            }
        }
    }
}
