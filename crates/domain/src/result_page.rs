//! List responses and the replace-only result page derived from them.

use serde::{Deserialize, Serialize};

use crate::pagination::page_count;
use crate::record::Record;

/// Body of the paginated list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    /// Total number of records matching the query, across all pages.
    #[serde(default)]
    pub count: Option<u64>,
    /// Link to the next page.
    #[serde(default)]
    pub next: Option<String>,
    /// Link to the previous page.
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page.
    #[serde(default)]
    pub results: Option<Vec<Record>>,
}

impl ListResponse {
    /// Creates a response carrying a total count and one page of records.
    #[must_use]
    pub const fn new(count: u64, results: Vec<Record>) -> Self {
        Self {
            count: Some(count),
            next: None,
            previous: None,
            results: Some(results),
        }
    }
}

/// The view model produced by the latest successful list fetch.
///
/// A page is never patched: every successful fetch builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    items: Vec<Record>,
    total_count: u64,
    page_count: u64,
}

impl ResultPage {
    /// Builds the page that replaces `previous` after a successful fetch.
    ///
    /// Items always come from the response (empty when absent). The counts
    /// come from the response when it carries one; otherwise the previous
    /// counts are kept.
    #[must_use]
    pub fn from_response(response: ListResponse, page_size: u32, previous: &Self) -> Self {
        let items = response.results.unwrap_or_default();
        match response.count {
            Some(total_count) => Self {
                items,
                total_count,
                page_count: page_count(total_count, page_size),
            },
            None => Self {
                items,
                total_count: previous.total_count,
                page_count: previous.page_count,
            },
        }
    }

    /// Records on the current page, in API order.
    #[must_use]
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// Total matching records across all pages.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of pages, `ceil(total_count / page_size)`.
    #[must_use]
    pub const fn page_count(&self) -> u64 {
        self.page_count
    }

    /// Returns true if the page holds no records.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn named(name: &str) -> Record {
        Record::from_value(json!({ "name": name })).expect("object")
    }

    #[test]
    fn test_page_count_derived_from_total() {
        let response = ListResponse::new(82, vec![named("Luke")]);
        let page = ResultPage::from_response(response, 12, &ResultPage::default());
        assert_eq!(page.total_count(), 82);
        assert_eq!(page.page_count(), 7);
        assert_eq!(page.items().len(), 1);
    }

    #[test]
    fn test_missing_count_keeps_previous_counts() {
        let previous =
            ResultPage::from_response(ListResponse::new(82, vec![]), 12, &ResultPage::default());
        let response = ListResponse {
            results: Some(vec![named("Leia")]),
            ..ListResponse::default()
        };
        let page = ResultPage::from_response(response, 12, &previous);
        assert_eq!(page.total_count(), 82);
        assert_eq!(page.page_count(), 7);
        assert_eq!(page.items()[0].name(), Some("Leia"));
    }

    #[test]
    fn test_missing_results_yield_empty_items() {
        let previous = ResultPage::from_response(
            ListResponse::new(1, vec![named("Luke")]),
            12,
            &ResultPage::default(),
        );
        let response = ListResponse {
            count: Some(0),
            ..ListResponse::default()
        };
        let page = ResultPage::from_response(response, 12, &previous);
        assert!(page.is_empty());
        assert_eq!(page.total_count(), 0);
        assert_eq!(page.page_count(), 0);
    }

    #[test]
    fn test_list_response_deserializes_api_body() {
        let body = json!({
            "count": 82,
            "next": "https://swapi.dev/api/people/?page=2",
            "previous": null,
            "results": [{ "name": "Luke Skywalker" }]
        });
        let response: ListResponse = serde_json::from_value(body).expect("deserialize");
        assert_eq!(response.count, Some(82));
        assert_eq!(response.previous, None);
        assert_eq!(response.results.map(|r| r.len()), Some(1));
    }

    #[test]
    fn test_list_response_rejects_non_numeric_count() {
        let body = json!({ "count": "many", "results": [] });
        assert!(serde_json::from_value::<ListResponse>(body).is_err());
    }
}
