//! App state and core application logic
//!
//! Holds the screen's state (query, result list, selected detail, loading
//! flag) and the transitions between the listing and detail views. Nothing
//! here touches the network or the terminal: requests are started with a
//! `begin_*` call and finished with the matching `complete_*` call once the
//! response (or error) is in hand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{DetailFailure, OmdbError, SearchFailure};
use crate::models::{MovieDetail, SearchPage, SearchRequest, SearchResultSummary};
use crate::ui::detail::line_count as detail_line_count;

// =============================================================================
// Notices
// =============================================================================

/// Shown when a search matched nothing
pub const NO_MOVIES_FOUND: &str = "No movies found!";
/// Shown when a search could not be completed
pub const SEARCH_FAILED: &str = "Error fetching data. Please try again later.";
/// Shown when the detail endpoint reports no such title
pub const DETAIL_NOT_FOUND: &str = "Error fetching movie details!";
/// Shown when a detail lookup could not be completed
pub const DETAIL_FAILED: &str = "Error fetching movie details. Please try again later.";

/// Receives user-visible notices (alerts, toasts, stderr lines, ...)
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

// =============================================================================
// View State
// =============================================================================

/// Which view the screen shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    /// Result list (possibly empty)
    Listing(&'a [SearchResultSummary]),
    /// Detail panel for one title
    Viewing(&'a MovieDetail),
}

impl ViewState<'_> {
    pub fn is_listing(&self) -> bool {
        matches!(self, ViewState::Listing(_))
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, ViewState::Viewing(_))
    }
}

/// Current input mode for keyboard handling
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputMode {
    /// Normal navigation mode
    #[default]
    Normal,
    /// Text input mode (search box focused)
    Editing,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond the state change already applied
    None,
    /// Run a search with the current query
    Search,
    /// Fetch details for this identifier
    OpenDetail(String),
}

// =============================================================================
// Selection State
// =============================================================================

/// Selection state for the result list
#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Currently selected index
    pub selected: usize,
    /// Total number of items
    pub len: usize,
}

impl ListState {
    pub fn new(len: usize) -> Self {
        Self { selected: 0, len }
    }

    /// Move selection up
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move selection down
    pub fn down(&mut self) {
        if self.len > 0 && self.selected < self.len - 1 {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.selected = self.selected.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize) {
        if self.len > 0 {
            self.selected = (self.selected + page_size).min(self.len - 1);
        }
    }

    pub fn first(&mut self) {
        self.selected = 0;
    }

    pub fn last(&mut self) {
        if self.len > 0 {
            self.selected = self.len - 1;
        }
    }

    /// Replace with a fresh list of `len` items, selection at the top
    pub fn reset(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

// =============================================================================
// Query Input
// =============================================================================

/// Single-line text input. The cursor counts characters, not bytes.
#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the text, cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert character at cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.text.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let idx = self.byte_index(self.cursor);
            self.text.remove(idx);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        if self.cursor < self.text.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Text split at the cursor, for rendering
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_index(self.cursor))
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// The movie search screen's state
#[derive(Debug)]
pub struct App {
    /// Whether the app is running
    pub running: bool,
    /// Current input mode
    pub input_mode: InputMode,
    /// Search box contents
    pub query: QueryInput,
    /// Last successfully fetched results, in upstream order
    results: Vec<SearchResultSummary>,
    /// Total matches reported for the last search
    total_results: u32,
    /// Result list selection
    pub list: ListState,
    /// Selected title; `Some` means the detail view is shown
    detail: Option<MovieDetail>,
    /// Scroll offset of the detail panel
    pub detail_scroll: u16,
    /// True while a request is outstanding
    loading: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            query: QueryInput::default(),
            results: Vec::new(),
            total_results: 0,
            list: ListState::default(),
            detail: None,
            detail_scroll: 0,
            loading: false,
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> ViewState<'_> {
        match &self.detail {
            Some(detail) => ViewState::Viewing(detail),
            None => ViewState::Listing(&self.results),
        }
    }

    pub fn results(&self) -> &[SearchResultSummary] {
        &self.results
    }

    pub fn total_results(&self) -> u32 {
        self.total_results
    }

    pub fn detail(&self) -> Option<&MovieDetail> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_result(&self) -> Option<&SearchResultSummary> {
        self.results.get(self.list.selected)
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn focus_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Start a search. Returns the request to send, with its query trimmed,
    /// or `None` (and no state change) if the query is blank.
    pub fn begin_search(&mut self, request: SearchRequest) -> Option<SearchRequest> {
        let query = request.trimmed_query()?.to_string();
        tracing::debug!(query = %query, "search started");
        self.loading = true;
        Some(SearchRequest { query, ..request })
    }

    /// Apply a finished search.
    ///
    /// Results replace the list. A "no match" answer yields an empty sequence
    /// and leaves the previous list on screen. Failures leave it too. An
    /// empty page replaces the list and raises the same notice as no match.
    pub fn complete_search(
        &mut self,
        outcome: Result<SearchPage, OmdbError>,
        notifier: &mut dyn Notifier,
    ) -> Result<Vec<SearchResultSummary>, SearchFailure> {
        self.loading = false;

        match outcome {
            Ok(page) => {
                tracing::info!(
                    count = page.results.len(),
                    total = page.total_results,
                    "search completed"
                );
                if page.is_empty() {
                    notifier.notify(NO_MOVIES_FOUND);
                }
                self.list.reset(page.results.len());
                self.total_results = page.total_results;
                self.results = page.results;
                Ok(self.results.clone())
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(reason = %e, "search matched nothing");
                notifier.notify(NO_MOVIES_FOUND);
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                notifier.notify(SEARCH_FAILED);
                Err(e)
            }
        }
    }

    /// Start a detail lookup. Returns false (no state change) for a blank id.
    pub fn begin_detail(&mut self, imdb_id: &str) -> bool {
        if imdb_id.trim().is_empty() {
            return false;
        }
        tracing::debug!(imdb_id = %imdb_id, "detail lookup started");
        self.loading = true;
        true
    }

    /// Apply a finished detail lookup. Only success changes the view.
    pub fn complete_detail(
        &mut self,
        outcome: Result<MovieDetail, OmdbError>,
        notifier: &mut dyn Notifier,
    ) -> Result<MovieDetail, DetailFailure> {
        self.loading = false;

        match outcome {
            Ok(detail) => {
                tracing::info!(imdb_id = %detail.imdb_id, title = %detail.title, "viewing detail");
                self.detail = Some(detail.clone());
                self.detail_scroll = 0;
                Ok(detail)
            }
            Err(e) if e.is_not_found() => {
                tracing::info!(reason = %e, "detail lookup matched nothing");
                notifier.notify(DETAIL_NOT_FOUND);
                Err(e)
            }
            Err(e) => {
                tracing::error!(error = %e, "detail lookup failed");
                notifier.notify(DETAIL_FAILED);
                Err(e)
            }
        }
    }

    /// Last scroll offset that still shows a line of the detail panel
    fn max_detail_scroll(&self) -> u16 {
        let lines = self.detail.as_ref().map_or(0, detail_line_count);
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    /// Leave the detail view. The result list is untouched.
    pub fn back(&mut self) {
        if self.detail.take().is_some() {
            tracing::debug!("back to listing");
        }
        self.detail_scroll = 0;
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle a key press and report what the event loop should do next
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Action::None;
        }

        if self.input_mode == InputMode::Editing {
            self.handle_editing_key(key)
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
                // Submitting is disabled while a request is in flight
                if !self.loading {
                    return Action::Search;
                }
            }
            KeyCode::Char(c) => self.query.insert(c),
            KeyCode::Backspace => self.query.backspace(),
            KeyCode::Delete => self.query.delete(),
            KeyCode::Left => self.query.left(),
            KeyCode::Right => self.query.right(),
            KeyCode::Home => self.query.home(),
            KeyCode::End => self.query.end(),
            _ => {}
        }
        Action::None
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return Action::None;
            }
            KeyCode::Char('/') | KeyCode::Char('s') => {
                self.focus_search();
                return Action::None;
            }
            _ => {}
        }

        if self.detail.is_some() {
            self.handle_viewing_key(key)
        } else {
            self.handle_listing_key(key)
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.up(),
            KeyCode::Down | KeyCode::Char('j') => self.list.down(),
            KeyCode::PageUp => self.list.page_up(10),
            KeyCode::PageDown => self.list.page_down(10),
            KeyCode::Home => self.list.first(),
            KeyCode::End => self.list.last(),
            KeyCode::Enter => {
                if let Some(result) = self.selected_result() {
                    return Action::OpenDetail(result.imdb_id.clone());
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_viewing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.back(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail_scroll = self.detail_scroll.saturating_add(1).min(self.max_detail_scroll());
            }
            _ => {}
        }
        Action::None
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn summary(id: &str, title: &str) -> SearchResultSummary {
        SearchResultSummary {
            title: title.into(),
            year: "2010".into(),
            imdb_id: id.into(),
            poster: None,
            media_type: MediaType::Movie,
        }
    }

    fn page(items: Vec<SearchResultSummary>) -> SearchPage {
        SearchPage {
            total_results: items.len() as u32,
            results: items,
        }
    }

    fn detail(id: &str, title: &str) -> MovieDetail {
        MovieDetail {
            imdb_id: id.into(),
            title: title.into(),
            year: "2010".into(),
            media_type: MediaType::Movie,
            rated: String::new(),
            released: String::new(),
            runtime: String::new(),
            genre: String::new(),
            director: String::new(),
            writer: String::new(),
            actors: String::new(),
            plot: String::new(),
            language: String::new(),
            country: String::new(),
            awards: String::new(),
            poster: None,
            ratings: vec![],
            imdb_rating: String::new(),
            imdb_votes: String::new(),
            metascore: None,
            box_office: None,
            total_seasons: None,
        }
    }

    fn app_with_results() -> App {
        let mut app = App::new();
        let mut notices = Vec::new();
        app.begin_search(SearchRequest::new("x")).unwrap();
        app.complete_search(
            Ok(page(vec![summary("tt1", "One"), summary("tt2", "Two")])),
            &mut notices,
        )
        .unwrap();
        app
    }

    // -------------------------------------------------------------------------
    // ListState Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_list_state_navigation() {
        let mut list = ListState::new(5);
        list.down();
        assert_eq!(list.selected, 1);

        list.last();
        list.down();
        assert_eq!(list.selected, 4);

        list.up();
        assert_eq!(list.selected, 3);

        list.page_up(10);
        assert_eq!(list.selected, 0);

        list.page_down(10);
        assert_eq!(list.selected, 4);
    }

    #[test]
    fn test_list_state_empty() {
        let mut list = ListState::new(0);
        list.down();
        list.last();
        list.page_down(3);
        assert_eq!(list.selected, 0);
    }

    // -------------------------------------------------------------------------
    // QueryInput Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_query_editing() {
        let mut q = QueryInput::default();
        for c in "hello".chars() {
            q.insert(c);
        }
        assert_eq!(q.text(), "hello");
        assert_eq!(q.cursor(), 5);

        q.left();
        q.left();
        q.insert('X');
        assert_eq!(q.text(), "helXlo");

        q.backspace();
        assert_eq!(q.text(), "hello");

        q.home();
        q.delete();
        assert_eq!(q.text(), "ello");

        q.end();
        q.right();
        assert_eq!(q.cursor(), 4);
    }

    #[test]
    fn test_query_multibyte_chars() {
        let mut q = QueryInput::default();
        q.set("Amélie");
        q.left();
        q.left();
        q.left();
        q.backspace();
        assert_eq!(q.text(), "Amlie");
        assert_eq!(q.split_at_cursor(), ("Am", "lie"));
    }

    // -------------------------------------------------------------------------
    // Transition Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_blank_query_is_noop() {
        let mut app = App::new();
        assert!(app.begin_search(SearchRequest::new("   ")).is_none());
        assert!(!app.is_loading());
        assert!(app.results().is_empty());
    }

    #[test]
    fn test_begin_search_trims_and_sets_loading() {
        let mut app = App::new();
        let req = app
            .begin_search(SearchRequest::new("  Inception  ").year(2010))
            .unwrap();
        assert_eq!(req.query, "Inception");
        assert_eq!(req.year, Some(2010));
        assert!(app.is_loading());
    }

    #[test]
    fn test_search_success_replaces_results() {
        let app = app_with_results();
        assert!(!app.is_loading());
        assert_eq!(app.results().len(), 2);
        assert_eq!(app.results()[0].imdb_id, "tt1");
        assert_eq!(app.total_results(), 2);
        assert!(app.current_state().is_listing());
    }

    #[test]
    fn test_search_not_found_keeps_previous_results() {
        let mut app = app_with_results();
        let mut notices = Vec::new();

        app.begin_search(SearchRequest::new("zzz")).unwrap();
        let out = app
            .complete_search(Err(OmdbError::NotFound("Movie not found!".into())), &mut notices)
            .unwrap();

        assert!(out.is_empty());
        assert_eq!(notices, vec![NO_MOVIES_FOUND.to_string()]);
        assert_eq!(app.results().len(), 2);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_empty_page_notifies_no_movies() {
        let mut app = app_with_results();
        let mut notices = Vec::new();

        app.begin_search(SearchRequest::new("zzz")).unwrap();
        let out = app.complete_search(Ok(page(vec![])), &mut notices).unwrap();

        assert!(out.is_empty());
        assert_eq!(notices, vec![NO_MOVIES_FOUND.to_string()]);
        assert!(app.results().is_empty());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_search_failure_keeps_previous_results() {
        let mut app = app_with_results();
        let mut notices = Vec::new();

        app.begin_search(SearchRequest::new("x")).unwrap();
        let out = app.complete_search(Err(OmdbError::ServerError(500)), &mut notices);

        assert!(out.is_err());
        assert_eq!(notices, vec![SEARCH_FAILED.to_string()]);
        assert_eq!(app.results().len(), 2);
        assert!(!app.is_loading());
    }

    #[test]
    fn test_detail_success_then_back() {
        let mut app = app_with_results();
        let mut notices = Vec::new();

        assert!(app.begin_detail("tt1"));
        assert!(app.is_loading());
        app.complete_detail(Ok(detail("tt1", "One")), &mut notices)
            .unwrap();

        assert!(!app.is_loading());
        match app.current_state() {
            ViewState::Viewing(d) => assert_eq!(d.title, "One"),
            other => panic!("expected Viewing, got {:?}", other),
        }

        app.back();
        match app.current_state() {
            ViewState::Listing(results) => assert_eq!(results.len(), 2),
            other => panic!("expected Listing, got {:?}", other),
        }
        assert!(notices.is_empty());
    }

    #[test]
    fn test_detail_not_found_stays_on_view() {
        let mut app = app_with_results();
        let mut notices = Vec::new();

        app.begin_detail("tt404");
        let out = app.complete_detail(
            Err(OmdbError::NotFound("Incorrect IMDb ID.".into())),
            &mut notices,
        );

        assert!(out.is_err());
        assert_eq!(notices, vec![DETAIL_NOT_FOUND.to_string()]);
        assert!(app.current_state().is_listing());
        assert!(!app.is_loading());
    }

    #[test]
    fn test_detail_failure_keeps_existing_detail() {
        let mut app = app_with_results();
        let mut notices = Vec::new();
        app.complete_detail(Ok(detail("tt1", "One")), &mut notices)
            .unwrap();

        app.begin_detail("tt2");
        let _ = app.complete_detail(Err(OmdbError::ServerError(502)), &mut notices);

        assert_eq!(notices, vec![DETAIL_FAILED.to_string()]);
        assert_eq!(app.detail().map(|d| d.imdb_id.as_str()), Some("tt1"));
    }

    #[test]
    fn test_blank_detail_id_is_noop() {
        let mut app = App::new();
        assert!(!app.begin_detail("  "));
        assert!(!app.is_loading());
    }

    #[test]
    fn test_back_from_listing_is_harmless() {
        let mut app = app_with_results();
        app.back();
        assert!(app.current_state().is_listing());
        assert_eq!(app.results().len(), 2);
    }

    #[test]
    fn test_late_search_updates_list_under_detail() {
        // Overlapping calls: the later completion wins, the detail stays put
        let mut app = app_with_results();
        let mut notices = Vec::new();
        app.complete_detail(Ok(detail("tt1", "One")), &mut notices)
            .unwrap();

        app.complete_search(Ok(page(vec![summary("tt9", "Nine")])), &mut notices)
            .unwrap();

        assert!(app.current_state().is_viewing());
        app.back();
        assert_eq!(app.results()[0].imdb_id, "tt9");
    }

    // -------------------------------------------------------------------------
    // Key Handling Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.running);

        let mut app = App::new();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!app.running);
    }

    #[test]
    fn test_typing_and_submit() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);

        for c in "alien".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.query.text(), "alien");

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::Search);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut app = App::new();
        app.query.set("alien");
        app.begin_search(SearchRequest::new("alien"));
        app.focus_search();

        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
    }

    #[test]
    fn test_enter_opens_selected_result() {
        let mut app = app_with_results();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(
            app.handle_key(key(KeyCode::Enter)),
            Action::OpenDetail("tt2".into())
        );
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut app = App::new();
        assert_eq!(app.handle_key(key(KeyCode::Enter)), Action::None);
    }

    #[test]
    fn test_escape_leaves_detail() {
        let mut app = app_with_results();
        let mut notices = Vec::new();
        app.complete_detail(Ok(detail("tt1", "One")), &mut notices)
            .unwrap();
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.detail_scroll, 1);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.current_state().is_listing());
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_detail_scroll_stops_at_last_line() {
        let mut app = app_with_results();
        let mut notices = Vec::new();
        let shown = detail("tt1", "One");
        let last = (detail_line_count(&shown) - 1) as u16;
        app.complete_detail(Ok(shown), &mut notices).unwrap();

        for _ in 0..100 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.detail_scroll, last);

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.detail_scroll, last - 1);
    }

    #[test]
    fn test_escape_in_editing_only_exits_editing() {
        let mut app = app_with_results();
        let mut notices = Vec::new();
        app.complete_detail(Ok(detail("tt1", "One")), &mut notices)
            .unwrap();
        app.focus_search();

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.current_state().is_viewing());
    }
}
