//! Modal alert popup
//!
//! Collects notices from the screen and shows the oldest one until a key
//! press dismisses it.

use std::collections::VecDeque;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::Notifier;
use crate::ui::Theme;

/// Pending alerts, oldest first
#[derive(Debug, Default)]
pub struct Alerts {
    queue: VecDeque<String>,
}

impl Alerts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alert currently on screen
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    pub fn is_showing(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Close the visible alert, revealing the next one
    pub fn dismiss(&mut self) -> bool {
        self.queue.pop_front().is_some()
    }

    /// Draw the visible alert centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let Some(message) = self.current() else {
            return;
        };

        let width = 56.min(area.width.saturating_sub(4));
        let height = 6.min(area.height);
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, popup);

        let hint = if self.queue.len() > 1 {
            format!("any key: next ({} more)", self.queue.len() - 1)
        } else {
            "any key: dismiss".to_string()
        };

        let body = Paragraph::new(vec![
            Line::from(Span::styled(message, Theme::error())),
            Line::from(""),
            Line::from(Span::styled(hint, Theme::dimmed())),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Theme::error())
                .title(Span::styled(" ALERT ", Theme::error()))
                .style(Style::default().bg(Theme::BACKGROUND)),
        );

        frame.render_widget(body, popup);
    }
}

impl Notifier for Alerts {
    fn notify(&mut self, message: &str) {
        self.queue.push_back(message.to_string());
    }
}
