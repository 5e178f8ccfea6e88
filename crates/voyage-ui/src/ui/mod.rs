//! Top-level UI layout: tab bar, active panel, status bar and overlays.

pub mod expense_panel;
pub mod map_panel;
pub mod overlays;
pub mod packing_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Tabs};
use ratatui::Frame;

use crate::app::{AppState, Overlay, Tab};
use crate::line_edit::LineEdit;
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_tabs(f, chunks[0], app);
    draw_panel(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    match &app.overlay {
        Overlay::Notice(msg) => overlays::render_notice(f, chunks[1], msg),
        Overlay::Confirm(target) => overlays::render_confirm(f, chunks[1], target.prompt()),
        Overlay::None => {}
    }
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} {} ", t.index() + 1, t.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(theme::muted())
        .highlight_style(theme::accent_bold())
        .divider("|");
    f.render_widget(tabs, area);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let tab = app.active_tab;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(format!(" {} ", tab.label()))
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);

    match tab {
        Tab::Map => map_panel::render(f, inner, app),
        Tab::Expenses => expense_panel::render(f, inner, app),
        Tab::Packing => packing_panel::render(f, inner, app),
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Amount with thousands separators; cents only when non-zero.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    if cents == "00" {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{cents}")
    }
}

/// `label: value` with a visible cursor when the field has focus.
pub fn input_line<'a>(label: &'a str, edit: &'a LineEdit, focused: bool) -> Line<'a> {
    let label_style = if focused { theme::accent_bold() } else { theme::muted() };
    let mut spans = vec![Span::styled(format!("{label:>8}: "), label_style)];

    if !focused {
        spans.push(Span::styled(edit.value(), theme::text()));
        return Line::from(spans);
    }

    let value = edit.value();
    let split = value
        .char_indices()
        .nth(edit.cursor())
        .map_or(value.len(), |(i, _)| i);
    let (before, rest) = value.split_at(split);
    let mut rest_chars = rest.chars();
    let under = rest_chars.next().map_or(" ".to_string(), |c| c.to_string());

    spans.push(Span::styled(before, theme::text()));
    spans.push(Span::styled(under, theme::cursor()));
    spans.push(Span::styled(rest_chars.as_str(), theme::text()));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(20000.0), "20,000");
        assert_eq!(format_amount(1234567.5), "1,234,567.50");
        assert_eq!(format_amount(-4500.0), "-4,500");
    }

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
    }

    #[test]
    fn test_input_line_cursor_at_end() {
        let mut edit = LineEdit::default();
        edit.set("東京");
        let line = input_line("Country", &edit, true);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Country: 東京 ");
    }
}
