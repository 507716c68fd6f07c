//! Search result list

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::app::App;
use crate::models::SearchResultSummary;
use crate::ui::Theme;

/// Render the result list, or a placeholder when there is nothing to show
pub fn render_results(frame: &mut Frame, area: Rect, app: &App) {
    let results = app.results();
    let title = if app.total_results() as usize > results.len() {
        format!(" RESULTS ({} of {}) ", results.len(), app.total_results())
    } else {
        format!(" RESULTS ({}) ", results.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border())
        .title(Span::styled(title, Theme::title()));

    if results.is_empty() {
        let hint = if app.is_loading() {
            "⟳ Searching..."
        } else {
            "Press / and type a title to search"
        };
        let empty = Paragraph::new(hint)
            .style(Theme::dimmed())
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = results
        .iter()
        .enumerate()
        .map(|(i, result)| result_item(result, i == app.list.selected))
        .collect();

    let list = List::new(items)
        .block(block)
        .style(Theme::text())
        .highlight_style(Theme::highlighted());

    let mut state = ListState::default().with_selected(Some(app.list.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn result_item(result: &SearchResultSummary, selected: bool) -> ListItem<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let poster = if result.has_poster() { "▣" } else { "·" };

    ListItem::new(Line::from(vec![
        Span::styled(marker, Theme::label()),
        Span::styled(format!("{} ", poster), Theme::dimmed()),
        Span::raw(result.title.clone()),
        Span::styled(format!(" ({})", result.year), Theme::year()),
        Span::styled(format!("  {}", result.media_type), Theme::dimmed()),
    ]))
}
