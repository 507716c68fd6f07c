//! Search/detail screen controller
//!
//! Wires an [`App`] state container to a [`MovieDatabase`] and a [`Notifier`],
//! running each request to completion before applying it. The TUI drives the
//! same `begin_*`/`complete_*` transitions from its event loop instead, so it
//! can keep drawing while a request is in flight.

use crate::api::{DetailFailure, MovieDatabase, SearchFailure};
use crate::app::{App, Notifier, ViewState};
use crate::models::{MovieDetail, PlotLength, SearchRequest, SearchResultSummary};

/// A movie search screen bound to its collaborators
pub struct MovieScreen<D, N> {
    app: App,
    db: D,
    notifier: N,
    plot: PlotLength,
}

impl<D: MovieDatabase, N: Notifier> MovieScreen<D, N> {
    pub fn new(db: D, notifier: N) -> Self {
        Self {
            app: App::new(),
            db,
            notifier,
            plot: PlotLength::default(),
        }
    }

    /// Plot length used for detail lookups
    pub fn with_plot(mut self, plot: PlotLength) -> Self {
        self.plot = plot;
        self
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn current_state(&self) -> ViewState<'_> {
        self.app.current_state()
    }

    pub fn is_loading(&self) -> bool {
        self.app.is_loading()
    }

    /// Search by free text. A blank query issues no request.
    pub async fn search(
        &mut self,
        query: &str,
    ) -> Result<Vec<SearchResultSummary>, SearchFailure> {
        self.search_with(SearchRequest::new(query)).await
    }

    /// Search with filters. A blank query issues no request.
    pub async fn search_with(
        &mut self,
        request: SearchRequest,
    ) -> Result<Vec<SearchResultSummary>, SearchFailure> {
        let Some(request) = self.app.begin_search(request) else {
            return Ok(Vec::new());
        };
        let outcome = self.db.search_page(&request).await;
        self.app.complete_search(outcome, &mut self.notifier)
    }

    /// Look up one title; on success the screen switches to the detail view
    pub async fn select_result(&mut self, imdb_id: &str) -> Result<MovieDetail, DetailFailure> {
        if !self.app.begin_detail(imdb_id) {
            return Err(DetailFailure::NotFound("empty identifier".into()));
        }
        let outcome = self.db.movie_detail(imdb_id.trim(), self.plot).await;
        self.app.complete_detail(outcome, &mut self.notifier)
    }

    /// Return to the result list
    pub fn back(&mut self) {
        self.app.back();
    }
}
