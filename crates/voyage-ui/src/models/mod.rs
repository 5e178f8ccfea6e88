pub mod country_panel;
pub mod forms;

pub use country_panel::{CountryPanel, LookupState, GRID_COLUMNS};
pub use forms::{ExpenseField, ExpenseForm, PackingField, PackingForm};
