pub mod client;
pub mod expense;
pub mod expense_manager;
pub mod outcome;
pub mod packing;
pub mod packing_manager;

pub use client::TravelClient;
pub use expense::{CountryStats, Expense, ExpenseDraft, ExpenseRequest, ExpenseStats, RecordId};
pub use expense_manager::{ExpenseManager, DELETE_EXPENSE_PROMPT};
pub use outcome::{Confirmation, DeleteOutcome, SubmitOutcome};
pub use packing::{CategoryGroup, PackingCategory, PackingDraft, PackingItem, PackingRequest, Progress};
pub use packing_manager::{PackingManager, DELETE_PACKING_PROMPT};
