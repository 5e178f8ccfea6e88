//! Terminal shell for the travel planner: country browser, expense ledger
//! and packing checklist.

pub mod app;
pub mod input;
pub mod line_edit;
pub mod models;
pub mod services;
pub mod theme;
pub mod ui;

pub use app::{Action, AppState, ConfirmTarget, Focus, Overlay, StatusLevel, Tab};
