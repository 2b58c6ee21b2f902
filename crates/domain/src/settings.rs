//! Client Settings Domain Model
//!
//! Defines how the catalog client talks to the remote API and how it
//! reacts to user input.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::query::DEFAULT_PAGE_SIZE;

/// Default remote API root.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";

/// Settings for the catalog client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Root of the remote API; list endpoints hang off it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Records the remote API returns per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout in milliseconds.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Quiet period before a search keystroke issues a request.
    /// Zero fetches on every keystroke.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Whether changing the search text or species filter returns to page 1.
    #[serde(default = "default_reset_page_on_filter_change")]
    pub reset_page_on_filter_change: bool,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

const fn default_request_timeout_ms() -> u64 {
    10_000
}

const fn default_search_debounce_ms() -> u64 {
    300
}

const fn default_reset_page_on_filter_change() -> bool {
    true
}

fn default_user_agent() -> String {
    "Holocron/0.1.0".to_string()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            request_timeout_ms: default_request_timeout_ms(),
            search_debounce_ms: default_search_debounce_ms(),
            reset_page_on_filter_change: default_reset_page_on_filter_change(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientSettings {
    /// Parses the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBaseUrl` if the URL does not parse, is
    /// not http(s), or cannot carry path segments.
    pub fn base_url(&self) -> DomainResult<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {}", self.base_url)))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(DomainError::InvalidBaseUrl(self.base_url.clone()));
        }
        Ok(url)
    }

    /// Checks every field that has a validity constraint.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> DomainResult<()> {
        if self.page_size == 0 {
            return Err(DomainError::InvalidPageSize(self.page_size));
        }
        self.base_url().map(|_| ())
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Search debounce window, or `None` when every keystroke fetches.
    #[must_use]
    pub const fn search_debounce(&self) -> Option<Duration> {
        if self.search_debounce_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.search_debounce_ms))
        }
    }
}
