//! UI rendering tests
//!
//! Renders the full screen into a `TestBackend` and checks what lands in the
//! buffer for the listing view, the detail view, and the alert overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

use omdbtui::app::{Action, App, Notifier, NO_MOVIES_FOUND};
use omdbtui::models::{MediaType, MovieDetail, Rating, SearchPage, SearchRequest, SearchResultSummary};
use omdbtui::ui::{self, Alerts};

fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn draw(terminal: &mut Terminal<TestBackend>, app: &App, alerts: &Alerts) -> String {
    terminal
        .draw(|frame| ui::render(frame, app, alerts))
        .unwrap();
    screen_text(terminal)
}

fn summary(id: &str, title: &str, year: &str) -> SearchResultSummary {
    SearchResultSummary {
        title: title.into(),
        year: year.into(),
        imdb_id: id.into(),
        poster: None,
        media_type: MediaType::Movie,
    }
}

fn blade_runner() -> MovieDetail {
    MovieDetail {
        imdb_id: "tt0083658".into(),
        title: "Blade Runner".into(),
        year: "1982".into(),
        media_type: MediaType::Movie,
        rated: "R".into(),
        released: "25 Jun 1982".into(),
        runtime: "117 min".into(),
        genre: "Action, Drama, Sci-Fi".into(),
        director: "Ridley Scott".into(),
        writer: "Hampton Fancher, David Peoples".into(),
        actors: "Harrison Ford, Rutger Hauer".into(),
        plot: "A blade runner must pursue four replicants.".into(),
        language: "English".into(),
        country: "United States".into(),
        awards: "N/A".into(),
        poster: None,
        ratings: vec![Rating {
            source: "Rotten Tomatoes".into(),
            value: "89%".into(),
        }],
        imdb_rating: "8.1".into(),
        imdb_votes: "800,000".into(),
        metascore: Some("84".into()),
        box_office: None,
        total_seasons: None,
    }
}

fn app_with_results() -> App {
    let mut app = App::new();
    let mut notices = Vec::new();
    app.query.set("blade runner");
    app.begin_search(SearchRequest::new("blade runner"));
    app.complete_search(
        Ok(SearchPage {
            results: vec![
                summary("tt0083658", "Blade Runner", "1982"),
                summary("tt1856101", "Blade Runner 2049", "2017"),
            ],
            total_results: 42,
        }),
        &mut notices,
    )
    .unwrap();
    app
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_empty_listing_shows_hint() {
    let mut terminal = test_terminal(80, 24);
    let text = draw(&mut terminal, &App::new(), &Alerts::new());

    assert!(text.contains("MOVIE SEARCH"));
    assert!(text.contains("Press / and type a title to search"));
    assert!(text.contains("NORMAL"));
}

#[test]
fn test_loading_listing_shows_spinner() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    app.begin_search(SearchRequest::new("alien"));

    let text = draw(&mut terminal, &app, &Alerts::new());

    assert!(text.contains("Searching..."));
    assert!(text.contains("Loading..."));
}

#[test]
fn test_listing_renders_results_in_order() {
    let mut terminal = test_terminal(80, 24);
    let app = app_with_results();

    let text = draw(&mut terminal, &app, &Alerts::new());

    assert!(text.contains("RESULTS (2 of 42)"));
    let first = text.find("Blade Runner (1982)").expect("first result shown");
    let second = text.find("Blade Runner 2049 (2017)").expect("second result shown");
    assert!(first < second);
    assert!(text.contains("▸"));
}

#[test]
fn test_editing_shows_cursor_in_search_box() {
    let mut terminal = test_terminal(80, 24);
    let mut app = App::new();
    app.handle_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::empty()));
    for c in "dune".chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()));
    }

    let text = draw(&mut terminal, &app, &Alerts::new());

    assert!(text.contains("dune│"));
    assert!(text.contains("INSERT"));
}

// =============================================================================
// Detail
// =============================================================================

#[test]
fn test_detail_view_replaces_listing() {
    let mut terminal = test_terminal(100, 30);
    let mut app = app_with_results();
    let mut notices = Vec::new();

    let action = app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
    assert_eq!(action, Action::OpenDetail("tt0083658".into()));
    app.begin_detail("tt0083658");
    app.complete_detail(Ok(blade_runner()), &mut notices).unwrap();

    let text = draw(&mut terminal, &app, &Alerts::new());

    assert!(!text.contains("RESULTS"));
    assert!(text.contains("Ridley Scott"));
    assert!(text.contains("Harrison Ford"));
    assert!(text.contains("Rotten Tomatoes"));
    assert!(text.contains("no poster"));
    assert!(text.contains("back to results"));
    // "N/A" fields are hidden
    assert!(!text.contains("Awards"));
}

#[test]
fn test_back_renders_listing_again() {
    let mut terminal = test_terminal(80, 24);
    let mut app = app_with_results();
    let mut notices = Vec::new();
    app.complete_detail(Ok(blade_runner()), &mut notices).unwrap();

    app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::empty()));
    let text = draw(&mut terminal, &app, &Alerts::new());

    assert!(text.contains("RESULTS (2 of 42)"));
    assert!(text.contains("Blade Runner 2049"));
}

// =============================================================================
// Alerts
// =============================================================================

#[test]
fn test_alert_overlay() {
    let mut terminal = test_terminal(80, 24);
    let app = app_with_results();
    let mut alerts = Alerts::new();
    alerts.notify(NO_MOVIES_FOUND);

    let text = draw(&mut terminal, &app, &alerts);
    assert!(text.contains("ALERT"));
    assert!(text.contains(NO_MOVIES_FOUND));

    alerts.dismiss();
    let text = draw(&mut terminal, &app, &alerts);
    assert!(!text.contains(NO_MOVIES_FOUND));
}

#[test]
fn test_renders_at_small_size() {
    let mut terminal = test_terminal(40, 10);
    let mut alerts = Alerts::new();
    alerts.notify("Error fetching data. Please try again later.");

    // Must not panic when the popup is larger than the screen
    draw(&mut terminal, &app_with_results(), &alerts);
}
