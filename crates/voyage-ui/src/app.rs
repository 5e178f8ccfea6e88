//! Top-level application state for the terminal shell.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

use voyage_core::{AppError, StartTab, UiConfig};
use voyage_services::{
    Confirmation, DeleteOutcome, ExpenseManager, PackingManager, RecordId,
    SubmitOutcome, DELETE_EXPENSE_PROMPT, DELETE_PACKING_PROMPT,
};
use voyage_weather::CountryLookup;

use crate::models::{CountryPanel, ExpenseForm, PackingForm};
use crate::services::{request_lookup, CountryServiceMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Map,
    Expenses,
    Packing,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Map, Tab::Expenses, Tab::Packing];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Map => "Countries",
            Tab::Expenses => "Expenses",
            Tab::Packing => "Packing",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Map => 0,
            Tab::Expenses => 1,
            Tab::Packing => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl From<StartTab> for Tab {
    fn from(tab: StartTab) -> Self {
        match tab {
            StartTab::Map => Tab::Map,
            StartTab::Expenses => Tab::Expenses,
            StartTab::Packing => Tab::Packing,
        }
    }
}

/// Where keystrokes go when no overlay is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Form,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmTarget {
    Expense(RecordId),
    Packing(RecordId),
}

impl ConfirmTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            ConfirmTarget::Expense(_) => DELETE_EXPENSE_PROMPT,
            ConfirmTarget::Packing(_) => DELETE_PACKING_PROMPT,
        }
    }

    pub fn answer(self, confirmation: Confirmation) -> Action {
        match self {
            ConfirmTarget::Expense(id) => Action::DeleteExpense(id, confirmation),
            ConfirmTarget::Packing(id) => Action::DeletePacking(id, confirmation),
        }
    }
}

/// Modal prompts drawn over the active tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// Dismissed with any key
    Notice(String),
    Confirm(ConfirmTarget),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Work that needs the network; produced by key handling, run by `perform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitExpense,
    SubmitPacking,
    DeleteExpense(RecordId, Confirmation),
    DeletePacking(RecordId, Confirmation),
    TogglePacking(RecordId),
    RefreshExpenses,
    RefreshPacking,
}

impl Action {
    /// True when the action writes to the backend
    pub fn is_mutation(&self) -> bool {
        match self {
            Action::SubmitExpense | Action::SubmitPacking | Action::TogglePacking(_) => true,
            Action::DeleteExpense(_, c) | Action::DeletePacking(_, c) => {
                *c == Confirmation::Accepted
            }
            Action::RefreshExpenses | Action::RefreshPacking => false,
        }
    }
}

pub struct AppState {
    pub running: bool,
    pub active_tab: Tab,
    pub focus: Focus,
    pub overlay: Overlay,
    pub status_message: Option<(String, StatusLevel)>,
    pub tick_rate: Duration,

    pub expenses: ExpenseManager,
    pub expense_form: ExpenseForm,
    pub expense_cursor: usize,

    pub packing: PackingManager,
    pub packing_form: PackingForm,
    pub packing_cursor: usize,

    pub countries: CountryPanel,
    lookup: Arc<CountryLookup>,
    lookup_tx: Sender<CountryServiceMessage>,
    lookup_rx: Receiver<CountryServiceMessage>,
}

impl AppState {
    pub fn new(
        expenses: ExpenseManager,
        packing: PackingManager,
        lookup: Arc<CountryLookup>,
        ui: &UiConfig,
    ) -> Self {
        let (lookup_tx, lookup_rx) = mpsc::channel();
        Self {
            running: true,
            active_tab: ui.start_tab.into(),
            focus: Focus::List,
            overlay: Overlay::None,
            status_message: None,
            tick_rate: Duration::from_millis(ui.tick_rate_ms),
            expenses,
            expense_form: ExpenseForm::default(),
            expense_cursor: 0,
            packing,
            packing_form: PackingForm::default(),
            packing_cursor: 0,
            countries: CountryPanel::default(),
            lookup,
            lookup_tx,
            lookup_rx,
        }
    }

    /// Initial fetch of every collection. Read failures leave lists empty.
    pub async fn load_all(&mut self) {
        self.expenses.refresh().await;
        self.packing.list().await;
        self.clamp_cursors();
    }

    pub fn base_currency(&self) -> &str {
        self.lookup.base_currency()
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn mark_saving(&mut self) {
        self.set_status("Saving...");
    }

    fn notice(&mut self, error: &AppError) {
        self.status_message = Some((error.to_string(), StatusLevel::Error));
        self.overlay = Overlay::Notice(error.user_message().to_string());
    }

    // ---- Country browser ----

    /// Select the highlighted country and start its lookup in the background.
    pub fn select_country(&mut self) {
        let country = self.countries.select_highlighted();
        request_lookup(&self.lookup_tx, self.lookup.clone(), country);
    }

    /// Apply finished lookups without blocking. Returns how many were applied.
    pub fn drain_lookups(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(msg) = self.lookup_rx.try_recv() {
            match msg {
                CountryServiceMessage::LookupDone { code, snapshot } => {
                    if self.countries.apply(code, snapshot) {
                        applied += 1;
                    } else {
                        tracing::debug!("Discarding stale lookup for {}", code);
                    }
                }
            }
        }
        applied
    }

    // ---- Selection ----

    pub fn selected_expense_id(&self) -> Option<RecordId> {
        self.expenses.expenses().get(self.expense_cursor).map(|e| e.id)
    }

    /// Packing ids in on-screen order (grouped by category)
    pub fn packing_order(&self) -> Vec<RecordId> {
        self.packing
            .groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|item| item.id))
            .collect()
    }

    pub fn selected_packing_id(&self) -> Option<RecordId> {
        self.packing_order().get(self.packing_cursor).copied()
    }

    pub fn move_cursor(&mut self, down: bool) {
        let (cursor, len) = match self.active_tab {
            Tab::Expenses => (&mut self.expense_cursor, self.expenses.expenses().len()),
            Tab::Packing => (&mut self.packing_cursor, self.packing.items().len()),
            Tab::Map => return,
        };
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    fn clamp_cursors(&mut self) {
        let expenses = self.expenses.expenses().len();
        self.expense_cursor = self.expense_cursor.min(expenses.saturating_sub(1));
        let items = self.packing.items().len();
        self.packing_cursor = self.packing_cursor.min(items.saturating_sub(1));
    }

    // ---- Forms ----

    pub fn begin_expense_edit(&mut self) -> bool {
        let Some(id) = self.selected_expense_id() else {
            return false;
        };
        if !self.expenses.begin_edit(id) {
            return false;
        }
        self.expense_form.load(self.expenses.draft());
        self.focus = Focus::Form;
        true
    }

    pub fn begin_packing_edit(&mut self) -> bool {
        let Some(id) = self.selected_packing_id() else {
            return false;
        };
        if !self.packing.begin_edit(id) {
            return false;
        }
        self.packing_form.load(self.packing.draft());
        self.focus = Focus::Form;
        true
    }

    /// Leave the form. A pending edit is abandoned; a new-record draft is kept.
    pub fn leave_form(&mut self) {
        match self.active_tab {
            Tab::Expenses if self.expenses.editing().is_some() => {
                self.expenses.cancel_edit();
                self.expense_form.clear();
            }
            Tab::Packing if self.packing.editing().is_some() => {
                self.packing.cancel_edit();
                self.packing_form.clear();
            }
            _ => {}
        }
        self.focus = Focus::List;
    }

    pub fn ask_delete(&mut self) {
        let target = match self.active_tab {
            Tab::Expenses => self.selected_expense_id().map(ConfirmTarget::Expense),
            Tab::Packing => self.selected_packing_id().map(ConfirmTarget::Packing),
            Tab::Map => None,
        };
        if let Some(target) = target {
            self.overlay = Overlay::Confirm(target);
        }
    }

    // ---- Backend work ----

    /// Run an action to completion. Each mutation is awaited before the
    /// follow-up refresh inside the managers.
    pub async fn perform(&mut self, action: Action) {
        match action {
            Action::SubmitExpense => {
                *self.expenses.draft_mut() = self.expense_form.to_draft();
                match self.expenses.submit().await {
                    Ok(outcome) => {
                        self.expense_form.clear();
                        self.focus = Focus::List;
                        let msg = match &outcome {
                            SubmitOutcome::Created(e) => format!("Saved expense for {}", e.country),
                            SubmitOutcome::Updated(e) => format!("Updated expense for {}", e.country),
                        };
                        self.set_status(msg);
                    }
                    Err(e) => self.notice(&e),
                }
            }
            Action::SubmitPacking => {
                *self.packing.draft_mut() = self.packing_form.to_draft();
                match self.packing.submit().await {
                    Ok(outcome) => {
                        self.packing_form.clear();
                        self.focus = Focus::List;
                        self.set_status(format!("Saved \"{}\"", outcome.record().item));
                    }
                    Err(e) => self.notice(&e),
                }
            }
            Action::DeleteExpense(id, confirmation) => {
                let was_editing = self.expenses.editing() == Some(id);
                match self.expenses.delete(id, confirmation).await {
                    Ok(DeleteOutcome::Deleted) => {
                        if was_editing {
                            self.expense_form.clear();
                            self.focus = Focus::List;
                        }
                        self.set_status("Expense deleted");
                    }
                    Ok(DeleteOutcome::Cancelled) => self.status_message = None,
                    Err(e) => self.notice(&e),
                }
            }
            Action::DeletePacking(id, confirmation) => {
                let was_editing = self.packing.editing() == Some(id);
                match self.packing.delete(id, confirmation).await {
                    Ok(DeleteOutcome::Deleted) => {
                        if was_editing {
                            self.packing_form.clear();
                            self.focus = Focus::List;
                        }
                        self.set_status("Item deleted");
                    }
                    Ok(DeleteOutcome::Cancelled) => self.status_message = None,
                    Err(e) => self.notice(&e),
                }
            }
            Action::TogglePacking(id) => {
                // Failure is already logged by the manager; no notice
                let _ = self.packing.toggle(id).await;
                self.status_message = None;
            }
            Action::RefreshExpenses => {
                self.expenses.refresh().await;
                self.set_status(format!("{} expenses", self.expenses.expenses().len()));
            }
            Action::RefreshPacking => {
                self.packing.list().await;
                self.set_status(format!("{} packing items", self.packing.items().len()));
            }
        }
        self.clamp_cursors();
    }
}
