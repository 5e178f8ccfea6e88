//! Expense ledger: totals, per-country breakdown, form and record list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::models::ExpenseField;
use crate::theme;
use crate::ui::{format_amount, input_line};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .split(columns[0]);

    render_summary(f, left[0], app);
    render_form(f, left[1], app);
    render_breakdown(f, left[2], app);
    render_list(f, columns[1], app);
}

fn render_summary(f: &mut Frame, area: Rect, app: &AppState) {
    let average = app
        .expenses
        .average_cost()
        .map_or_else(|| "-".to_string(), format_amount);

    let lines = vec![
        Line::from(vec![
            Span::styled("Total   ", theme::muted()),
            Span::styled(format_amount(app.expenses.total_cost()), theme::accent_bold()),
        ]),
        Line::from(vec![
            Span::styled("Average ", theme::muted()),
            Span::styled(average, theme::text()),
        ]),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Form;
    let title = match app.expenses.editing() {
        Some(id) => format!(" Edit expense #{id} "),
        None => " New expense [a] ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused));

    let form = &app.expense_form;
    let lines: Vec<Line> = ExpenseField::ALL
        .iter()
        .map(|field| input_line(field.label(), form.field(*field), focused && form.field == *field))
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(" By country ")
        .title_style(theme::muted())
        .border_style(theme::muted());

    let lines: Vec<Line> = match app.expenses.stats() {
        Some(stats) if !stats.country_stats.is_empty() => stats
            .country_stats
            .iter()
            .map(|(country, s)| {
                Line::from(vec![
                    Span::styled(format!("{country:<6}"), theme::accent()),
                    Span::styled(
                        format!("{} trips  {} days  ", s.count, s.days),
                        theme::muted(),
                    ),
                    Span::styled(format_amount(s.cost), theme::text()),
                ])
            })
            .collect(),
        _ => vec![Line::from(Span::styled("No trips recorded", theme::muted()))],
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_list(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(format!(" Records ({}) ", app.expenses.expenses().len()))
        .title_style(theme::panel_title(focused));

    let items: Vec<ListItem> = app
        .expenses
        .expenses()
        .iter()
        .map(|e| {
            let mut spans = vec![
                Span::styled(format!("{:<6}", e.country), theme::accent()),
                Span::styled(format!("{:>3}d  ", e.days), theme::muted()),
                Span::styled(format!("{:>10}", format_amount(e.cost)), theme::text()),
            ];
            if let Some(note) = e.note.as_deref().filter(|n| !n.is_empty()) {
                spans.push(Span::styled(format!("  {note}"), theme::muted()));
            }
            if app.expenses.editing() == Some(e.id) {
                spans.push(Span::styled("  (editing)", theme::warning()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme::selected())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.expenses.expenses().is_empty() {
        state.select(Some(app.expense_cursor));
    }
    f.render_stateful_widget(list, area, &mut state);
}
