//! Terminal UI components
//!
//! Built with ratatui. Keyboard-first: `/` to search, arrows to move,
//! Enter to open a title, `b`/ESC to go back.

pub mod alerts;
pub mod detail;
pub mod results;
pub mod theme;

pub use alerts::Alerts;
pub use theme::Theme;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::app::{App, InputMode, ViewState};

/// Draw the whole screen: header with search box, current view, status bar,
/// and any pending alert on top
pub fn render(frame: &mut Frame, app: &App, alerts: &Alerts) {
    let area = frame.area();

    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Theme::text()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);

    match app.current_state() {
        ViewState::Listing(_) => results::render_results(frame, chunks[1], app),
        ViewState::Viewing(detail) => {
            detail::render_detail(frame, chunks[1], detail, app.detail_scroll)
        }
    }

    render_status_bar(frame, chunks[2], app);
    alerts.render(frame, area);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Editing;

    let text = if editing {
        let (before, after) = app.query.split_at_cursor();
        format!("⌕ {}│{}", before, after)
    } else if app.query.text().is_empty() {
        "⌕ Press / to search...".to_string()
    } else {
        format!("⌕ {}", app.query.text())
    };

    let search_box = Paragraph::new(text)
        .style(if editing {
            Theme::input().fg(Theme::PRIMARY)
        } else {
            Theme::input()
        })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(if editing {
                    Theme::border_focused()
                } else {
                    Theme::border()
                })
                .title(Span::styled(" MOVIE SEARCH ", Theme::title())),
        );
    frame.render_widget(search_box, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode = match app.input_mode {
        InputMode::Normal => Span::styled(
            " NORMAL ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::PRIMARY),
        ),
        InputMode::Editing => Span::styled(
            " INSERT ",
            Style::default().fg(Theme::BACKGROUND).bg(Theme::ACCENT),
        ),
    };

    let activity = if app.is_loading() {
        Span::styled(" Loading... ", Theme::loading())
    } else {
        Span::raw(" ")
    };

    let help = match app.current_state() {
        ViewState::Listing(_) => " q:quit  /:search  ↑↓:move  ↵:details ",
        ViewState::Viewing(_) => " q:quit  /:search  ↑↓:scroll  b:back ",
    };

    let line = Line::from(vec![
        mode,
        activity,
        Span::raw("│"),
        Span::styled(help, Theme::dimmed()),
    ]);

    frame.render_widget(Paragraph::new(line).style(Theme::status_bar()), area);
}
