//! Marquee theme for omdbtui
//!
//! Warm cinema-lobby palette: amber marquee lights over a dark auditorium.

use ratatui::style::{Color, Modifier, Style};

/// Color palette and style helpers
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #101014 (auditorium dark)
    pub const BACKGROUND: Color = Color::Rgb(0x10, 0x10, 0x14);

    /// Panels and the status bar: #1c1c24
    pub const PANEL: Color = Color::Rgb(0x1c, 0x1c, 0x24);

    /// Primary: #ffb300 (marquee amber)
    pub const PRIMARY: Color = Color::Rgb(0xff, 0xb3, 0x00);

    /// Secondary: #e5484d (velvet red)
    pub const SECONDARY: Color = Color::Rgb(0xe5, 0x48, 0x4d);

    /// Accent: #7dd3fc (projector blue)
    pub const ACCENT: Color = Color::Rgb(0x7d, 0xd3, 0xfc);

    /// Text: #ececec
    pub const TEXT: Color = Color::Rgb(0xec, 0xec, 0xec);

    /// Dim: #6b6b78
    pub const DIM: Color = Color::Rgb(0x6b, 0x6b, 0x78);

    /// Good score: #4ade80
    pub const GOOD: Color = Color::Rgb(0x4a, 0xde, 0x80);

    /// Error: #ff5c5c
    pub const ERROR: Color = Color::Rgb(0xff, 0x5c, 0x5c);

    /// Border (dim amber)
    pub const BORDER: Color = Color::Rgb(0x80, 0x5a, 0x00);

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND)
    }

    /// Selected list row
    pub fn highlighted() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn year() -> Style {
        Style::default().fg(Self::SECONDARY)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    pub fn border_focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn input() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::PANEL)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// IMDb score coloring: green from 7.0, amber from 5.0, dim below
    pub fn score(score: Option<f32>) -> Style {
        match score {
            Some(s) if s >= 7.0 => Style::default().fg(Self::GOOD),
            Some(s) if s >= 5.0 => Style::default().fg(Self::PRIMARY),
            _ => Self::dimmed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_thresholds() {
        assert_eq!(Theme::score(Some(8.8)).fg, Some(Theme::GOOD));
        assert_eq!(Theme::score(Some(7.0)).fg, Some(Theme::GOOD));
        assert_eq!(Theme::score(Some(5.5)).fg, Some(Theme::PRIMARY));
        assert_eq!(Theme::score(Some(2.0)).fg, Some(Theme::DIM));
        assert_eq!(Theme::score(None).fg, Some(Theme::DIM));
    }

    #[test]
    fn test_highlight_inverts_background() {
        let style = Theme::highlighted();
        assert_eq!(style.fg, Some(Theme::BACKGROUND));
        assert_eq!(style.bg, Some(Theme::PRIMARY));
    }
}
