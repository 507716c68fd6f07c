//! Request plumbing for the interactive TUI
//!
//! Requests run on spawned tasks so the UI keeps drawing. Each task sends a
//! [`Completion`] back over a channel; the event loop applies completions in
//! arrival order. Overlapping requests are not coordinated: whichever
//! finishes last decides the loading flag and the data it carries.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::{MovieDatabase, OmdbError};
use crate::app::{Action, App, Notifier};
use crate::models::{MovieDetail, PlotLength, SearchPage, SearchRequest};

/// A finished request, ready to be applied to the app state
#[derive(Debug)]
pub enum Completion {
    Search(Result<SearchPage, OmdbError>),
    Detail(Result<MovieDetail, OmdbError>),
}

/// Starts requests for key actions and reports their completions
pub struct Dispatcher {
    db: Arc<dyn MovieDatabase>,
    plot: PlotLength,
    tx: UnboundedSender<Completion>,
}

impl Dispatcher {
    pub fn new(
        db: Arc<dyn MovieDatabase>,
        plot: PlotLength,
    ) -> (Self, UnboundedReceiver<Completion>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { db, plot, tx }, rx)
    }

    /// Start the request `action` asks for. Returns true if one was spawned.
    pub fn dispatch(&self, action: Action, app: &mut App) -> bool {
        match action {
            Action::None => false,
            Action::Search => {
                let Some(request) = app.begin_search(SearchRequest::new(app.query.text())) else {
                    return false;
                };
                let db = Arc::clone(&self.db);
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let outcome = db.search_page(&request).await;
                    // Receiver gone means the UI has shut down
                    let _ = tx.send(Completion::Search(outcome));
                });
                true
            }
            Action::OpenDetail(imdb_id) => {
                if !app.begin_detail(&imdb_id) {
                    return false;
                }
                let db = Arc::clone(&self.db);
                let tx = self.tx.clone();
                let plot = self.plot;
                tokio::spawn(async move {
                    let outcome = db.movie_detail(&imdb_id, plot).await;
                    let _ = tx.send(Completion::Detail(outcome));
                });
                true
            }
        }
    }
}

/// Apply a finished request to the app state
pub fn apply(completion: Completion, app: &mut App, notifier: &mut dyn Notifier) {
    // Errors were already logged and surfaced through the notifier
    match completion {
        Completion::Search(outcome) => {
            let _ = app.complete_search(outcome, notifier);
        }
        Completion::Detail(outcome) => {
            let _ = app.complete_detail(outcome, notifier);
        }
    }
}
