//! Detail panel for one title
//!
//! Header line, score, credits, ratings by source, and the plot, scrollable
//! with up/down.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::models::{MovieDetail, NOT_AVAILABLE};
use crate::ui::Theme;

/// Render `detail` into `area`, skipping the first `scroll` lines
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &MovieDetail, scroll: u16) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Theme::border_focused())
        .title(Span::styled(format!(" {} ", detail.title), Theme::title()))
        .title_bottom(Line::from(vec![
            Span::styled(" b/ESC ", Theme::keybind()),
            Span::styled("back to results ", Theme::dimmed()),
        ]));

    let body = Paragraph::new(detail_text(detail))
        .block(block)
        .style(Theme::text())
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(body, area);
}

fn field<'a>(label: &'a str, value: &'a str) -> Option<Line<'a>> {
    if value.is_empty() || value == NOT_AVAILABLE {
        return None;
    }
    Some(Line::from(vec![
        Span::styled(format!("{:<10}", label), Theme::label()),
        Span::raw(value),
    ]))
}

/// Lines shown in the detail panel
pub fn detail_text(detail: &MovieDetail) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(detail.title.as_str(), Theme::title()),
            Span::styled(format!(" ({})", detail.year), Theme::year()),
        ]),
        Line::from(vec![
            Span::styled("★ ", Theme::score(detail.imdb_score())),
            Span::styled(detail.imdb_rating.as_str(), Theme::score(detail.imdb_score())),
            Span::styled(format!("  {} votes", detail.imdb_votes), Theme::dimmed()),
        ]),
        Line::from(""),
    ];

    let fields = [
        ("Rated", detail.rated.as_str()),
        ("Released", detail.released.as_str()),
        ("Runtime", detail.runtime.as_str()),
        ("Genre", detail.genre.as_str()),
        ("Director", detail.director.as_str()),
        ("Writer", detail.writer.as_str()),
        ("Cast", detail.actors.as_str()),
        ("Language", detail.language.as_str()),
        ("Country", detail.country.as_str()),
        ("Awards", detail.awards.as_str()),
        ("Metascore", detail.metascore.as_deref().unwrap_or_default()),
        ("Box office", detail.box_office.as_deref().unwrap_or_default()),
        ("Seasons", detail.total_seasons.as_deref().unwrap_or_default()),
    ];
    lines.extend(fields.into_iter().filter_map(|(l, v)| field(l, v)));

    if !detail.ratings.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Ratings", Theme::label())));
        for rating in &detail.ratings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<26}", rating.source), Theme::dimmed()),
                Span::raw(rating.value.as_str()),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Plot", Theme::label())));
    lines.push(Line::from(detail.plot.as_str()));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Poster    ", Theme::label()),
        match detail.poster.as_deref() {
            Some(url) => Span::styled(url, Theme::dimmed()),
            None => Span::styled("no poster", Theme::dimmed()),
        },
    ]));

    lines
}

/// Number of unwrapped lines in the detail panel
pub fn line_count(detail: &MovieDetail) -> usize {
    detail_text(detail).len()
}
