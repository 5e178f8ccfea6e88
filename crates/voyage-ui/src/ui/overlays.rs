//! Modal prompts: blocking notice and delete confirmation.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_notice(f: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(60, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::negative())
        .title(" Notice ")
        .title_style(theme::negative());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, theme::text())),
        Line::from(""),
        Line::from(Span::styled("Press any key to continue", theme::muted())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

pub fn render_confirm(f: &mut Frame, area: Rect, prompt: &str) {
    let popup = centered_rect(50, 30, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::warning())
        .title(" Confirm ")
        .title_style(theme::warning());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(prompt, theme::text())),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", theme::accent_bold()),
            Span::styled(" yes   ", theme::muted()),
            Span::styled("[n]", theme::accent_bold()),
            Span::styled(" no", theme::muted()),
        ]),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
