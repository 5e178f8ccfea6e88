//! Packing checklist: overall gauge, form and grouped list.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::models::PackingField;
use crate::theme;
use crate::ui::input_line;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    render_gauge(f, rows[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    render_form(f, columns[0], app);
    render_groups(f, columns[1], app);
}

fn render_gauge(f: &mut Frame, area: Rect, app: &AppState) {
    let progress = app.packing.progress();
    let percent = progress.percent();
    let gauge = Gauge::default()
        .gauge_style(theme::positive())
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!(
            "{}/{} packed ({percent:.0}%)",
            progress.checked, progress.total
        ));
    f.render_widget(gauge, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::Form;
    let title = match app.packing.editing() {
        Some(id) => format!(" Edit item #{id} "),
        None => " New item [a] ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(title)
        .title_style(theme::panel_title(focused));

    let form = &app.packing_form;
    let on_category = focused && form.field == PackingField::Category;
    let category_style = if on_category { theme::accent_bold() } else { theme::muted() };

    let lines = vec![
        input_line("Item", &form.item, focused && form.field == PackingField::Item),
        Line::from(vec![
            Span::styled(format!("{:>8}: ", "Category"), category_style),
            Span::styled(if on_category { "< " } else { "  " }, theme::accent()),
            Span::styled(
                format!("{} {}", form.category.emoji(), form.category.label()),
                theme::text(),
            ),
            Span::styled(if on_category { " >" } else { "" }, theme::accent()),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_groups(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.focus == Focus::List;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(" Checklist [space] toggle ")
        .title_style(theme::panel_title(focused));

    let groups = app.packing.groups();
    if groups.is_empty() {
        let empty = Paragraph::new(Span::styled("Nothing to pack yet", theme::muted())).block(block);
        f.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut position = 0usize;
    let mut cursor_line = 0usize;

    for group in &groups {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {}", group.category.emoji(), group.category.label()),
                theme::accent_bold(),
            ),
            Span::styled(
                format!("  {}/{}", group.progress.checked, group.progress.total),
                theme::muted(),
            ),
        ]));

        for item in &group.items {
            let box_mark = if item.checked { "[x]" } else { "[ ]" };
            let mut style = theme::checked(item.checked);
            if position == app.packing_cursor {
                style = style.patch(theme::selected());
                cursor_line = lines.len();
            }
            let mut spans = vec![Span::styled(format!("  {box_mark} {}", item.item), style)];
            if app.packing.editing() == Some(item.id) {
                spans.push(Span::styled("  (editing)", theme::warning()));
            }
            lines.push(Line::from(spans));
            position += 1;
        }
    }

    // Keep the cursor row on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(visible.saturating_sub(1)) as u16;

    f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}
