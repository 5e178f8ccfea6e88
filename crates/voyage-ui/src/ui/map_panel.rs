//! Country browser: trip stats header, country grid, selected snapshot.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use voyage_weather::COUNTRIES;

use crate::app::AppState;
use crate::models::{LookupState, GRID_COLUMNS};
use crate::theme;
use crate::ui::format_amount;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = COUNTRIES.len().div_ceil(GRID_COLUMNS) as u16;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(rows * 3),
            Constraint::Min(4),
        ])
        .split(area);

    render_stats(f, chunks[0], app);
    render_grid(f, chunks[1], app);
    render_snapshot(f, chunks[2], app);
}

fn render_stats(f: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.expenses.stats() {
        Some(stats) => Line::from(vec![
            Span::styled("Trips ", theme::muted()),
            Span::styled(stats.total_trips.to_string(), theme::accent_bold()),
            Span::styled("   Days ", theme::muted()),
            Span::styled(stats.total_days.to_string(), theme::accent_bold()),
            Span::styled("   Spent ", theme::muted()),
            Span::styled(format_amount(stats.total_cost), theme::accent_bold()),
        ]),
        None => Line::from(Span::styled("Trip stats unavailable", theme::muted())),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &AppState) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); COUNTRIES.len().div_ceil(GRID_COLUMNS)])
        .split(area);

    let selected_code = app.countries.selected().map(|c| c.code);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let idx = row * GRID_COLUMNS + col;
            let Some(country) = COUNTRIES.get(idx) else {
                continue;
            };
            let highlighted = idx == app.countries.cursor();
            let marker = if selected_code == Some(country.code) { "*" } else { " " };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(highlighted));
            let text = Line::from(vec![
                Span::raw(format!("{marker}{} ", country.emoji)),
                Span::styled(
                    country.name,
                    if highlighted { theme::accent_bold() } else { theme::text() },
                ),
            ]);
            f.render_widget(Paragraph::new(text).block(block), *cell);
        }
    }
}

fn render_snapshot(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme::muted());

    let Some(country) = app.countries.selected() else {
        let hint = Paragraph::new(Span::styled(
            "Pick a country with the arrow keys and press Enter",
            theme::muted(),
        ))
        .block(block);
        f.render_widget(hint, area);
        return;
    };

    let mut lines = vec![Line::from(Span::styled(
        format!("{} {} ({})", country.emoji, country.name, country.currency),
        theme::accent_bold(),
    ))];

    match app.countries.state() {
        LookupState::Idle => {}
        LookupState::Loading => {
            lines.push(Line::from(Span::styled("Loading...", theme::warning())));
        }
        LookupState::Ready(snapshot) => {
            let base = app.base_currency();
            lines.push(Line::from(vec![
                Span::styled("Weather  ", theme::muted()),
                Span::styled(
                    format!("{}°C  {}", snapshot.rounded_temperature(), snapshot.description),
                    theme::text(),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Rate     ", theme::muted()),
                Span::styled(
                    format!("1 {base} = {:.4} {}", snapshot.exchange_rate, country.currency),
                    theme::text(),
                ),
            ]));
            if let Some(inverse) = snapshot.inverse_rate() {
                lines.push(Line::from(Span::styled(
                    format!("         1 {} ≈ {inverse:.2} {base}", country.currency),
                    theme::muted(),
                )));
            }
        }
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
