//! Load species options use case

use std::sync::Arc;

use holocron_domain::Record;
use tracing::{debug, warn};

use crate::ports::CatalogApi;

/// Loads the species list offered by the filter control.
///
/// A failure degrades to an empty option list; it never surfaces as the
/// catalog's load error.
pub struct LoadSpeciesOptions<A: ?Sized> {
    api: Arc<A>,
}

impl<A: CatalogApi + ?Sized> LoadSpeciesOptions<A> {
    /// Creates a new `LoadSpeciesOptions` use case.
    pub const fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Executes the use case.
    pub async fn execute(&self) -> Vec<Record> {
        match self.api.list_species().await {
            Ok(species) => {
                debug!(count = species.len(), "species options loaded");
                species
            }
            Err(error) => {
                warn!(%error, "failed to load species options");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use async_trait::async_trait;
    use holocron_domain::{ListRequest, ListResponse};
    use serde_json::json;

    struct SpeciesApi {
        species: Result<Vec<Record>, FetchError>,
    }

    #[async_trait]
    impl CatalogApi for SpeciesApi {
        async fn list_people(&self, _: &ListRequest) -> Result<ListResponse, FetchError> {
            Ok(ListResponse::default())
        }

        async fn list_species(&self) -> Result<Vec<Record>, FetchError> {
            self.species.clone()
        }

        async fn fetch_record(&self, _: &str) -> Result<Record, FetchError> {
            Err(FetchError::Http { status: 404 })
        }
    }

    #[tokio::test]
    async fn test_returns_species() {
        let human = Record::from_value(json!({ "name": "Human" })).unwrap();
        let use_case = LoadSpeciesOptions::new(Arc::new(SpeciesApi {
            species: Ok(vec![human.clone()]),
        }));
        assert_eq!(use_case.execute().await, vec![human]);
    }

    #[tokio::test]
    async fn test_failure_degrades_to_empty() {
        let use_case = LoadSpeciesOptions::new(Arc::new(SpeciesApi {
            species: Err(FetchError::Network("offline".to_string())),
        }));
        assert!(use_case.execute().await.is_empty());
    }
}
