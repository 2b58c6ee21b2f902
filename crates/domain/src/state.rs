//! Catalog view state and its reducer.
//!
//! All view state lives in one `CatalogState` value. It only changes
//! through `CatalogState::reduce`, which applies one `CatalogAction` and
//! reports what happened so the caller knows whether a fetch is due.

use serde::{Deserialize, Serialize};

use crate::details::{CharacterDetails, Homeworld};
use crate::favorites::FavoriteSet;
use crate::pagination::{to_api_page, to_ui_selection};
use crate::query::QueryState;
use crate::record::{Record, RecordId};
use crate::result_page::{ListResponse, ResultPage};

/// Message shown whenever the character list fails to load.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Sequence number of an issued list request.
///
/// Tokens increase monotonically; only the highest token seen may update
/// the result page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Wraps a raw sequence number.
    #[must_use]
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the raw sequence number.
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

/// An event that changes the catalog state.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// A one-indexed page was chosen.
    PageChanged(u32),
    /// A zero-indexed page-selection widget reported a selection.
    PageSelected(u32),
    /// The search input changed.
    SearchChanged(String),
    /// The species filter changed.
    SpeciesFilterChanged(String),
    /// A list request was issued.
    FetchStarted(RequestToken),
    /// A list request succeeded.
    FetchSucceeded {
        /// Token of the request.
        token: RequestToken,
        /// Decoded response body.
        response: ListResponse,
    },
    /// A list request failed.
    FetchFailed {
        /// Token of the request.
        token: RequestToken,
    },
    /// A card's favorite control was toggled.
    FavoriteToggled(RecordId),
    /// Species filter options arrived.
    SpeciesOptionsLoaded(Vec<Record>),
    /// The details view was opened for a record.
    DetailsOpened(Record),
    /// The homeworld lookup for a record finished.
    HomeworldLoaded {
        /// Record the lookup was issued for.
        record_id: RecordId,
        /// Homeworld, or `None` if the lookup failed.
        homeworld: Option<Homeworld>,
    },
    /// The details view was closed.
    DetailsClosed,
}

/// Outcome of reducing one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    Unchanged,
    /// The query changed; a new fetch is due.
    QueryChanged,
    /// State changed without affecting the query.
    Updated,
    /// The action belonged to a superseded request or selection and was
    /// dropped.
    Discarded,
}

impl Transition {
    /// Returns true if the caller should synchronize the result page.
    #[must_use]
    pub const fn needs_fetch(self) -> bool {
        matches!(self, Self::QueryChanged)
    }
}

/// The complete view state of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    query: QueryState,
    results: ResultPage,
    loading: bool,
    error: Option<String>,
    favorites: FavoriteSet,
    species_options: Vec<String>,
    details: Option<CharacterDetails>,
    latest_token: RequestToken,
    reset_page_on_filter_change: bool,
}

impl CatalogState {
    /// Creates the session-start state for `query`.
    #[must_use]
    pub fn new(query: QueryState, reset_page_on_filter_change: bool) -> Self {
        Self {
            query,
            reset_page_on_filter_change,
            ..Self::default()
        }
    }

    /// Applies one action.
    pub fn reduce(&mut self, action: CatalogAction) -> Transition {
        match action {
            CatalogAction::PageChanged(page) => changed(self.query.set_page(page)),
            CatalogAction::PageSelected(selection) => {
                changed(self.query.set_page(to_api_page(selection)))
            }
            CatalogAction::SearchChanged(text) => changed(
                self.query
                    .set_search_text(text, self.reset_page_on_filter_change),
            ),
            CatalogAction::SpeciesFilterChanged(value) => changed(
                self.query
                    .set_species_filter(value, self.reset_page_on_filter_change),
            ),
            CatalogAction::FetchStarted(token) => {
                if token < self.latest_token {
                    return Transition::Discarded;
                }
                self.latest_token = token;
                self.loading = true;
                Transition::Updated
            }
            CatalogAction::FetchSucceeded { token, response } => {
                if token != self.latest_token {
                    return Transition::Discarded;
                }
                self.results =
                    ResultPage::from_response(response, self.query.page_size(), &self.results);
                self.error = None;
                self.loading = false;
                Transition::Updated
            }
            CatalogAction::FetchFailed { token } => {
                if token != self.latest_token {
                    return Transition::Discarded;
                }
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
                self.loading = false;
                Transition::Updated
            }
            CatalogAction::FavoriteToggled(id) => {
                self.favorites.toggle(id);
                Transition::Updated
            }
            CatalogAction::SpeciesOptionsLoaded(species) => {
                self.species_options = species
                    .iter()
                    .filter_map(Record::name)
                    .map(str::to_string)
                    .collect();
                Transition::Updated
            }
            CatalogAction::DetailsOpened(record) => {
                self.details = Some(CharacterDetails::open(record));
                Transition::Updated
            }
            CatalogAction::HomeworldLoaded {
                record_id,
                homeworld,
            } => match self.details.as_mut() {
                Some(details) if details.record_id().as_ref() == Some(&record_id) => {
                    details.homeworld = homeworld;
                    details.loading = false;
                    Transition::Updated
                }
                _ => Transition::Discarded,
            },
            CatalogAction::DetailsClosed => {
                if self.details.take().is_some() {
                    Transition::Updated
                } else {
                    Transition::Unchanged
                }
            }
        }
    }

    /// Current query.
    #[must_use]
    pub const fn query(&self) -> &QueryState {
        &self.query
    }

    /// Page-selection widget index for the current page.
    #[must_use]
    pub const fn ui_selection(&self) -> u32 {
        to_ui_selection(self.query.page())
    }

    /// Result page of the latest successful fetch.
    #[must_use]
    pub const fn results(&self) -> &ResultPage {
        &self.results
    }

    /// True while the latest list request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// User-visible error of the latest list request, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Favorited record identifiers.
    #[must_use]
    pub const fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    /// Returns true if `record` is a favorite.
    #[must_use]
    pub fn is_favorite(&self, record: &Record) -> bool {
        record.id().is_some_and(|id| self.favorites.contains(&id))
    }

    /// Species names offered by the filter control.
    #[must_use]
    pub fn species_options(&self) -> &[String] {
        &self.species_options
    }

    /// The open details view, if any.
    #[must_use]
    pub const fn details(&self) -> Option<&CharacterDetails> {
        self.details.as_ref()
    }

    /// Token of the most recently issued list request.
    #[must_use]
    pub const fn latest_token(&self) -> RequestToken {
        self.latest_token
    }
}

const fn changed(query_changed: bool) -> Transition {
    if query_changed {
        Transition::QueryChanged
    } else {
        Transition::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn named(name: &str) -> Record {
        Record::from_value(json!({
            "name": name,
            "url": format!("https://swapi.dev/api/people/{name}/"),
            "homeworld": "https://swapi.dev/api/planets/1/"
        }))
        .expect("object")
    }

    fn state() -> CatalogState {
        CatalogState::new(QueryState::default(), true)
    }

    fn names(state: &CatalogState) -> Vec<&str> {
        state
            .results()
            .items()
            .iter()
            .filter_map(Record::name)
            .collect()
    }

    #[test]
    fn test_query_actions_request_fetch() {
        let mut state = state();
        assert!(state.reduce(CatalogAction::PageChanged(2)).needs_fetch());
        assert!(!state.reduce(CatalogAction::PageChanged(2)).needs_fetch());
        assert!(state.reduce(CatalogAction::PageSelected(4)).needs_fetch());
        assert_eq!(state.query().page(), 5);
        assert_eq!(state.ui_selection(), 4);
        assert!(
            state
                .reduce(CatalogAction::SearchChanged("Luke".to_string()))
                .needs_fetch()
        );
        assert_eq!(state.query().page(), 1);
    }

    #[test]
    fn test_filter_change_keeps_page_when_reset_disabled() {
        let mut state = CatalogState::new(QueryState::default(), false);
        state.reduce(CatalogAction::PageChanged(3));
        state.reduce(CatalogAction::SpeciesFilterChanged("Droid".to_string()));
        assert_eq!(state.query().page(), 3);
    }

    #[test]
    fn test_success_replaces_results_and_clears_loading() {
        let mut state = state();
        let token = RequestToken::new(1);
        state.reduce(CatalogAction::FetchStarted(token));
        assert!(state.is_loading());

        let response = ListResponse::new(82, vec![named("Luke"), named("Leia")]);
        let transition = state.reduce(CatalogAction::FetchSucceeded { token, response });
        assert_eq!(transition, Transition::Updated);
        assert!(!state.is_loading());
        assert_eq!(names(&state), vec!["Luke", "Leia"]);
        assert_eq!(state.results().page_count(), 7);
    }

    #[test]
    fn test_stale_success_is_discarded() {
        let mut state = state();
        let first = RequestToken::new(1);
        let second = RequestToken::new(2);
        state.reduce(CatalogAction::FetchStarted(first));
        state.reduce(CatalogAction::FetchStarted(second));

        let newer = ListResponse::new(1, vec![named("Leia")]);
        state.reduce(CatalogAction::FetchSucceeded {
            token: second,
            response: newer,
        });
        let older = ListResponse::new(1, vec![named("Luke")]);
        let transition = state.reduce(CatalogAction::FetchSucceeded {
            token: first,
            response: older,
        });

        assert_eq!(transition, Transition::Discarded);
        assert_eq!(names(&state), vec!["Leia"]);
    }

    #[test]
    fn test_late_start_does_not_rewind_token() {
        let mut state = state();
        state.reduce(CatalogAction::FetchStarted(RequestToken::new(2)));
        let transition = state.reduce(CatalogAction::FetchStarted(RequestToken::new(1)));
        assert_eq!(transition, Transition::Discarded);
        assert_eq!(state.latest_token(), RequestToken::new(2));
    }

    #[test]
    fn test_stale_resolution_keeps_loading_for_newer_request() {
        let mut state = state();
        state.reduce(CatalogAction::FetchStarted(RequestToken::new(1)));
        state.reduce(CatalogAction::FetchStarted(RequestToken::new(2)));
        state.reduce(CatalogAction::FetchFailed {
            token: RequestToken::new(1),
        });
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_failure_keeps_prior_results_then_retry_clears_error() {
        let mut state = state();
        state.reduce(CatalogAction::FetchStarted(RequestToken::new(1)));
        state.reduce(CatalogAction::FetchSucceeded {
            token: RequestToken::new(1),
            response: ListResponse::new(1, vec![named("Luke")]),
        });

        state.reduce(CatalogAction::FetchStarted(RequestToken::new(2)));
        state.reduce(CatalogAction::FetchFailed {
            token: RequestToken::new(2),
        });
        assert_eq!(state.error(), Some(LOAD_ERROR_MESSAGE));
        assert!(!state.is_loading());
        assert_eq!(names(&state), vec!["Luke"]);

        state.reduce(CatalogAction::FetchStarted(RequestToken::new(3)));
        state.reduce(CatalogAction::FetchSucceeded {
            token: RequestToken::new(3),
            response: ListResponse::new(1, vec![named("Leia")]),
        });
        assert_eq!(state.error(), None);
        assert_eq!(names(&state), vec!["Leia"]);
    }

    #[test]
    fn test_favorites_double_toggle() {
        let mut state = state();
        let luke = named("Luke");
        let id = luke.id().expect("id");
        state.reduce(CatalogAction::FavoriteToggled(id.clone()));
        assert!(state.is_favorite(&luke));
        state.reduce(CatalogAction::FavoriteToggled(id));
        assert!(!state.is_favorite(&luke));
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn test_species_options_keep_names() {
        let mut state = state();
        state.reduce(CatalogAction::SpeciesOptionsLoaded(vec![
            named("Human"),
            Record::default(),
            named("Droid"),
        ]));
        assert_eq!(state.species_options(), ["Human", "Droid"]);
    }

    #[test]
    fn test_homeworld_for_other_record_is_discarded() {
        let mut state = state();
        state.reduce(CatalogAction::DetailsOpened(named("Luke")));
        assert!(state.details().is_some_and(|d| d.loading));

        let stale = state.reduce(CatalogAction::HomeworldLoaded {
            record_id: named("Leia").id().expect("id"),
            homeworld: None,
        });
        assert_eq!(stale, Transition::Discarded);

        let homeworld = Homeworld {
            name: Some("Tatooine".to_string()),
            ..Homeworld::default()
        };
        state.reduce(CatalogAction::HomeworldLoaded {
            record_id: named("Luke").id().expect("id"),
            homeworld: Some(homeworld.clone()),
        });
        let details = state.details().expect("details open");
        assert!(!details.loading);
        assert_eq!(details.homeworld, Some(homeworld));

        assert_eq!(
            state.reduce(CatalogAction::DetailsClosed),
            Transition::Updated
        );
        assert_eq!(
            state.reduce(CatalogAction::DetailsClosed),
            Transition::Unchanged
        );
    }
}
