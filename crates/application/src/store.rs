//! Catalog store: query state holder and fetch orchestrator.
//!
//! The store owns the `CatalogState` and is the only writer of it. Every
//! user intent is reduced into the state; intents that change the query
//! start a synchronization cycle against the remote catalog.

use std::sync::Arc;
use std::time::Duration;

use holocron_domain::{
    CatalogAction, CatalogState, CharacterDetails, ClientSettings, DomainResult, QueryState,
    Record, RecordId, RequestToken, ResultPage, Transition,
};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::debounce::Debouncer;
use crate::error::SyncError;
use crate::ports::CatalogApi;
use crate::sequencer::RequestSequencer;
use crate::use_cases::{LoadHomeworld, LoadSpeciesOptions};

/// Result of a user intent that may trigger a fetch.
///
/// `Ok(None)` means the query did not change and nothing was fetched.
pub type SyncResult = Result<Option<ResultPage>, SyncError>;

/// Shared catalog store.
///
/// Cloning is cheap; clones share state, so overlapping intents from
/// different tasks are reconciled through request tokens.
pub struct CatalogStore<A: ?Sized> {
    api: Arc<A>,
    state: Arc<RwLock<CatalogState>>,
    sequencer: Arc<RequestSequencer>,
    debouncer: Arc<Debouncer>,
    search_debounce: Option<Duration>,
}

impl<A: ?Sized> Clone for CatalogStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            sequencer: Arc::clone(&self.sequencer),
            debouncer: Arc::clone(&self.debouncer),
            search_debounce: self.search_debounce,
        }
    }
}

impl<A: CatalogApi + ?Sized> CatalogStore<A> {
    /// Creates a store with the session-start state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured page size is zero.
    pub fn new(api: Arc<A>, settings: &ClientSettings) -> DomainResult<Self> {
        let query = QueryState::new(settings.page_size)?;
        let state = CatalogState::new(query, settings.reset_page_on_filter_change);
        Ok(Self {
            api,
            state: Arc::new(RwLock::new(state)),
            sequencer: Arc::new(RequestSequencer::new()),
            debouncer: Arc::new(Debouncer::new()),
            search_debounce: settings.search_debounce(),
        })
    }

    /// Returns a copy of the whole state.
    pub async fn snapshot(&self) -> CatalogState {
        self.state.read().await.clone()
    }

    /// Returns the current query.
    pub async fn query(&self) -> QueryState {
        self.state.read().await.query().clone()
    }

    async fn dispatch(&self, action: CatalogAction) -> Transition {
        self.state.write().await.reduce(action)
    }

    /// Issues the next token and marks it as the latest, under the state
    /// write lock.
    fn begin_fetch(&self, state: &mut CatalogState) -> Result<RequestToken, SyncError> {
        let token = self.sequencer.issue();
        if state.reduce(CatalogAction::FetchStarted(token)) == Transition::Discarded {
            debug!(token = token.sequence(), "request superseded before it was sent");
            return Err(SyncError::Superseded);
        }
        Ok(token)
    }

    /// Fetches the page described by `query` and reconciles it into the
    /// state.
    ///
    /// The call takes a fresh request token. Its outcome, success or
    /// failure, is applied only if no newer request was issued meanwhile;
    /// otherwise it is dropped and `SyncError::Superseded` is returned.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Fetch` if the fetch failed (the previous page
    /// stays visible), or `SyncError::Superseded` if the outcome was stale.
    pub async fn synchronize(&self, query: QueryState) -> Result<ResultPage, SyncError> {
        let token = self.begin_fetch(&mut *self.state.write().await)?;
        self.complete_fetch(token, &query).await
    }

    /// Re-runs the fetch for the current query.
    ///
    /// The query is read under the same lock that issues the token, so the
    /// latest token always carries the latest query.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn refresh(&self) -> Result<ResultPage, SyncError> {
        let (token, query) = {
            let mut state = self.state.write().await;
            let token = self.begin_fetch(&mut state)?;
            (token, state.query().clone())
        };
        self.complete_fetch(token, &query).await
    }

    async fn complete_fetch(
        &self,
        token: RequestToken,
        query: &QueryState,
    ) -> Result<ResultPage, SyncError> {
        let request = query.to_request();
        debug!(
            token = token.sequence(),
            page = request.page,
            search = request.search.as_deref(),
            homeworld = request.homeworld.as_deref(),
            "issuing list request"
        );
        let outcome = self.api.list_people(&request).await;

        let mut state = self.state.write().await;
        match outcome {
            Ok(response) => {
                if state.reduce(CatalogAction::FetchSucceeded { token, response })
                    == Transition::Discarded
                {
                    debug!(token = token.sequence(), "discarding stale response");
                    return Err(SyncError::Superseded);
                }
                let results = state.results().clone();
                info!(
                    token = token.sequence(),
                    items = results.items().len(),
                    total = results.total_count(),
                    pages = results.page_count(),
                    "result page updated"
                );
                Ok(results)
            }
            Err(fetch_error) => {
                if state.reduce(CatalogAction::FetchFailed { token }) == Transition::Discarded {
                    debug!(token = token.sequence(), error = %fetch_error, "discarding stale failure");
                    return Err(SyncError::Superseded);
                }
                error!(
                    token = token.sequence(),
                    kind = fetch_error.kind().title(),
                    error = %fetch_error,
                    "list request failed"
                );
                Err(SyncError::Fetch(fetch_error))
            }
        }
    }

    /// Manual retry after a failed load.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn retry(&self) -> Result<ResultPage, SyncError> {
        self.debouncer.cancel();
        self.refresh().await
    }

    /// Moves to a one-indexed page.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn set_page(&self, page: u32) -> SyncResult {
        self.apply_query_change(CatalogAction::PageChanged(page))
            .await
    }

    /// Handles a zero-indexed selection from a page-selection widget.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn select_ui_page(&self, selection: u32) -> SyncResult {
        self.apply_query_change(CatalogAction::PageSelected(selection))
            .await
    }

    /// Updates the species filter.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn set_species_filter(&self, value: impl Into<String>) -> SyncResult {
        self.apply_query_change(CatalogAction::SpeciesFilterChanged(value.into()))
            .await
    }

    /// Updates the search text.
    ///
    /// The text is stored at once. When a debounce window is configured,
    /// the fetch waits for the window to pass without another keystroke;
    /// superseded keystrokes return `SyncError::Superseded`.
    ///
    /// # Errors
    ///
    /// See [`Self::synchronize`].
    pub async fn set_search(&self, text: impl Into<String>) -> SyncResult {
        let transition = self
            .dispatch(CatalogAction::SearchChanged(text.into()))
            .await;
        if !transition.needs_fetch() {
            return Ok(None);
        }
        if let Some(window) = self.search_debounce
            && !self.debouncer.settle(window).await
        {
            debug!("search keystroke superseded within debounce window");
            return Err(SyncError::Superseded);
        }
        self.refresh().await.map(Some)
    }

    /// Toggles a favorite. Returns true if `id` is a favorite afterwards.
    pub async fn toggle_favorite(&self, id: RecordId) -> bool {
        let mut state = self.state.write().await;
        state.reduce(CatalogAction::FavoriteToggled(id.clone()));
        state.favorites().contains(&id)
    }

    /// Loads the species filter options. Failure leaves them empty.
    ///
    /// Returns the number of options loaded.
    pub async fn load_species_options(&self) -> usize {
        let species = LoadSpeciesOptions::new(Arc::clone(&self.api))
            .execute()
            .await;
        let mut state = self.state.write().await;
        state.reduce(CatalogAction::SpeciesOptionsLoaded(species));
        state.species_options().len()
    }

    /// Opens the details view for `record` and resolves its homeworld.
    ///
    /// Returns the details as they stand once the lookup finished, or
    /// `None` if another record was opened (or the view closed) meanwhile.
    pub async fn open_details(&self, record: Record) -> Option<CharacterDetails> {
        self.dispatch(CatalogAction::DetailsOpened(record.clone()))
            .await;

        if let Some(record_id) = record.id()
            && record.homeworld_url().is_some()
        {
            let homeworld = LoadHomeworld::new(Arc::clone(&self.api))
                .execute(&record)
                .await;
            let transition = self
                .dispatch(CatalogAction::HomeworldLoaded {
                    record_id,
                    homeworld,
                })
                .await;
            if transition == Transition::Discarded {
                debug!("homeworld arrived for a record no longer selected");
                return None;
            }
        }

        self.state.read().await.details().cloned()
    }

    /// Closes the details view.
    pub async fn close_details(&self) {
        self.dispatch(CatalogAction::DetailsClosed).await;
    }

    async fn apply_query_change(&self, action: CatalogAction) -> SyncResult {
        if !self.dispatch(action).await.needs_fetch() {
            return Ok(None);
        }
        self.debouncer.cancel();
        self.refresh().await.map(Some)
    }
}
