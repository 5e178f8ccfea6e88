//! Bottom status bar: key hints for the current context and the last status.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, Overlay, StatusLevel, Tab};
use crate::theme;

fn hints(app: &AppState) -> &'static str {
    match (&app.overlay, app.focus, app.active_tab) {
        (Overlay::Confirm(_), _, _) => " y:confirm n:cancel",
        (Overlay::Notice(_), _, _) => " any key:close",
        (_, Focus::Form, Tab::Packing) => " Enter:save Tab:field ←/→:category Esc:back",
        (_, Focus::Form, _) => " Enter:save Tab:next field Esc:back",
        (_, Focus::List, Tab::Map) => " 1-3:tabs hjkl:move Enter:lookup q:quit",
        (_, Focus::List, Tab::Expenses) => " 1-3:tabs a:add e:edit d:delete r:refresh q:quit",
        (_, Focus::List, Tab::Packing) => {
            " 1-3:tabs a:add e:edit d:delete space:toggle r:refresh q:quit"
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = vec![Span::styled(hints(app), theme::muted())];

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
