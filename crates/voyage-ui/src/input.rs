//! Keyboard input dispatch: overlays, then forms, then global keys, then the
//! active tab.
//!
//! Handlers only touch local state. Anything that needs the backend comes
//! back as an `Action` for the event loop to await.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use voyage_services::Confirmation;

use crate::app::{Action, AppState, ConfirmTarget, Focus, Overlay, Tab};
use crate::models::PackingField;

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Option<Action> {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return None;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Notice(_) => {
            app.overlay = Overlay::None;
            return None;
        }
        Overlay::Confirm(target) => {
            let target = *target;
            return handle_confirm(app, target, key);
        }
        Overlay::None => {}
    }

    // 2. A focused form takes every printable key, including `q`.
    if app.focus == Focus::Form {
        return match app.active_tab {
            Tab::Expenses => handle_expense_form(app, key),
            Tab::Packing => handle_packing_form(app, key),
            Tab::Map => {
                app.focus = Focus::List;
                None
            }
        };
    }

    // 3. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return None;
        }
        KeyCode::Char('1') => {
            app.active_tab = Tab::Map;
            return None;
        }
        KeyCode::Char('2') => {
            app.active_tab = Tab::Expenses;
            return None;
        }
        KeyCode::Char('3') => {
            app.active_tab = Tab::Packing;
            return None;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab = app.active_tab.prev();
            } else {
                app.active_tab = app.active_tab.next();
            }
            return None;
        }
        KeyCode::BackTab => {
            app.active_tab = app.active_tab.prev();
            return None;
        }
        _ => {}
    }

    // 4. Tab-specific keys.
    match app.active_tab {
        Tab::Map => {
            handle_map(app, key);
            None
        }
        Tab::Expenses => handle_expense_list(app, key),
        Tab::Packing => handle_packing_list(app, key),
    }
}

fn handle_confirm(app: &mut AppState, target: ConfirmTarget, key: KeyEvent) -> Option<Action> {
    let confirmation = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Confirmation::Accepted,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Confirmation::Declined,
        _ => return None,
    };
    app.overlay = Overlay::None;
    Some(target.answer(confirmation))
}

fn handle_map(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.countries.move_left(),
        KeyCode::Right | KeyCode::Char('l') => app.countries.move_right(),
        KeyCode::Up | KeyCode::Char('k') => app.countries.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.countries.move_down(),
        KeyCode::Enter => app.select_country(),
        _ => {}
    }
}

fn handle_expense_list(app: &mut AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
        KeyCode::Char('a') => app.focus = Focus::Form,
        KeyCode::Char('e') => {
            app.begin_expense_edit();
        }
        KeyCode::Char('d') => app.ask_delete(),
        KeyCode::Char('r') => return Some(Action::RefreshExpenses),
        _ => {}
    }
    None
}

fn handle_packing_list(app: &mut AppState, key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
        KeyCode::Char('a') => app.focus = Focus::Form,
        KeyCode::Char('e') => {
            app.begin_packing_edit();
        }
        KeyCode::Char('d') => app.ask_delete(),
        KeyCode::Char('r') => return Some(Action::RefreshPacking),
        KeyCode::Char(' ') => return app.selected_packing_id().map(Action::TogglePacking),
        _ => {}
    }
    None
}

fn handle_expense_form(app: &mut AppState, key: KeyEvent) -> Option<Action> {
    let form = &mut app.expense_form;
    match key.code {
        KeyCode::Esc => app.leave_form(),
        KeyCode::Enter => return Some(Action::SubmitExpense),
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.previous(),
        KeyCode::Left => form.active_mut().left(),
        KeyCode::Right => form.active_mut().right(),
        KeyCode::Home => form.active_mut().home(),
        KeyCode::End => form.active_mut().end(),
        KeyCode::Backspace => form.active_mut().backspace(),
        KeyCode::Delete => form.active_mut().delete(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_mut().push(ch);
        }
        _ => {}
    }
    None
}

fn handle_packing_form(app: &mut AppState, key: KeyEvent) -> Option<Action> {
    let form = &mut app.packing_form;
    match (key.code, form.field) {
        (KeyCode::Esc, _) => app.leave_form(),
        (KeyCode::Enter, _) => return Some(Action::SubmitPacking),
        (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
            form.field = form.field.toggle();
        }
        (KeyCode::Left, PackingField::Category) => form.category = form.category.previous(),
        (KeyCode::Right, PackingField::Category) => form.category = form.category.next(),
        (KeyCode::Left, PackingField::Item) => form.item.left(),
        (KeyCode::Right, PackingField::Item) => form.item.right(),
        (KeyCode::Home, PackingField::Item) => form.item.home(),
        (KeyCode::End, PackingField::Item) => form.item.end(),
        (KeyCode::Backspace, PackingField::Item) => form.item.backspace(),
        (KeyCode::Delete, PackingField::Item) => form.item.delete(),
        (KeyCode::Char(ch), PackingField::Item)
            if !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            form.item.push(ch);
        }
        _ => {}
    }
    None
}
