//! Color tokens and shared styles.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 200, 255);
pub const POSITIVE: Color = Color::Rgb(0, 220, 120);
pub const NEGATIVE: Color = Color::Rgb(255, 80, 110);
pub const WARNING: Color = Color::Rgb(255, 160, 0);
pub const MUTED: Color = Color::Rgb(120, 140, 170);
pub const TEXT: Color = Color::White;
pub const HIGHLIGHT_BG: Color = Color::Rgb(40, 50, 70);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Row under the list cursor
pub fn selected() -> Style {
    Style::default().bg(HIGHLIGHT_BG).add_modifier(Modifier::BOLD)
}

/// Character under the text cursor of a focused input
pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Checked items are green, pending ones plain
pub fn checked(done: bool) -> Style {
    if done {
        positive()
    } else {
        text()
    }
}
