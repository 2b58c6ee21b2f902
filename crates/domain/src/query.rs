//! Query state and the list request derived from it.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::pagination::FIRST_PAGE;

/// Default number of records the remote API returns per page.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Path segment of the paginated character list endpoint.
pub const PEOPLE_RESOURCE: &str = "people";

/// Path segment of the species list endpoint.
pub const SPECIES_RESOURCE: &str = "species";

/// The inputs that fully determine the next list fetch.
///
/// `page` is always at least 1. Bounds against the remote page count are
/// not enforced: an out-of-range page simply yields an empty or short page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    page: u32,
    search_text: String,
    species_filter: String,
    page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            search_text: String::new(),
            species_filter: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Creates the session-start query: page 1, no filters.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPageSize` if `page_size` is zero.
    pub fn new(page_size: u32) -> DomainResult<Self> {
        if page_size == 0 {
            return Err(DomainError::InvalidPageSize(page_size));
        }
        Ok(Self {
            page_size,
            ..Self::default()
        })
    }

    /// Current one-indexed page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Current free-text search.
    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Current species filter value.
    #[must_use]
    pub fn species_filter(&self) -> &str {
        &self.species_filter
    }

    /// Records per page, used to derive the page count.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Sets the page. Zero is clamped to the first page.
    ///
    /// Returns true if the page changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(FIRST_PAGE);
        let changed = self.page != page;
        self.page = page;
        changed
    }

    /// Sets the search text, optionally resetting to the first page when the
    /// text actually changes.
    ///
    /// Returns true if the text changed.
    pub fn set_search_text(&mut self, text: impl Into<String>, reset_page: bool) -> bool {
        let text = text.into();
        if self.search_text == text {
            return false;
        }
        self.search_text = text;
        if reset_page {
            self.page = FIRST_PAGE;
        }
        true
    }

    /// Sets the species filter, optionally resetting to the first page when
    /// the value actually changes.
    ///
    /// Returns true if the filter changed.
    pub fn set_species_filter(&mut self, value: impl Into<String>, reset_page: bool) -> bool {
        let value = value.into();
        if self.species_filter == value {
            return false;
        }
        self.species_filter = value;
        if reset_page {
            self.page = FIRST_PAGE;
        }
        true
    }

    /// Builds the list request for this state.
    #[must_use]
    pub fn to_request(&self) -> ListRequest {
        ListRequest {
            page: self.page,
            search: non_empty(&self.search_text),
            homeworld: non_empty(&self.species_filter),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A request against the paginated list endpoint.
///
/// Serializes to the endpoint's query string: `page` is always present,
/// `search` and `homeworld` only when set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    /// One-indexed page.
    pub page: u32,
    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Species filter, sent as the `homeworld` parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homeworld: Option<String>,
}

impl ListRequest {
    /// Returns the URL-encoded query string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuery` if encoding fails.
    pub fn query_string(&self) -> DomainResult<String> {
        serde_urlencoded::to_string(self).map_err(|e| DomainError::InvalidQuery(e.to_string()))
    }

    /// Returns the full request URL against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base` cannot carry path segments or the query
    /// cannot be encoded.
    pub fn to_url(&self, base: &Url) -> DomainResult<Url> {
        let mut url = resource_url(base, PEOPLE_RESOURCE)?;
        url.set_query(Some(&self.query_string()?));
        Ok(url)
    }
}

/// Returns `{base}/{resource}/`, keeping any path the base already carries.
///
/// # Errors
///
/// Returns `DomainError::InvalidBaseUrl` for URLs that cannot be a base
/// (e.g. `mailto:`).
pub fn resource_url(base: &Url, resource: &str) -> DomainResult<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| DomainError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(resource)
        .push("");
    Ok(url)
}
