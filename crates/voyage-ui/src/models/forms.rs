//! Form buffers behind the expense and packing editors.
//!
//! Text lives in `LineEdit`s while the user types and is copied into the
//! manager's draft right before a submit.

use voyage_services::{ExpenseDraft, PackingCategory, PackingDraft};

use crate::line_edit::LineEdit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Country,
    Days,
    Cost,
    Note,
}

impl ExpenseField {
    pub const ALL: [ExpenseField; 4] = [
        ExpenseField::Country,
        ExpenseField::Days,
        ExpenseField::Cost,
        ExpenseField::Note,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseField::Country => "Country",
            ExpenseField::Days => "Days",
            ExpenseField::Cost => "Cost",
            ExpenseField::Note => "Note",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub country: LineEdit,
    pub days: LineEdit,
    pub cost: LineEdit,
    pub note: LineEdit,
    pub field: ExpenseField,
}

impl ExpenseForm {
    pub fn field_mut(&mut self, field: ExpenseField) -> &mut LineEdit {
        match field {
            ExpenseField::Country => &mut self.country,
            ExpenseField::Days => &mut self.days,
            ExpenseField::Cost => &mut self.cost,
            ExpenseField::Note => &mut self.note,
        }
    }

    pub fn field(&self, field: ExpenseField) -> &LineEdit {
        match field {
            ExpenseField::Country => &self.country,
            ExpenseField::Days => &self.days,
            ExpenseField::Cost => &self.cost,
            ExpenseField::Note => &self.note,
        }
    }

    pub fn active_mut(&mut self) -> &mut LineEdit {
        self.field_mut(self.field)
    }

    pub fn load(&mut self, draft: &ExpenseDraft) {
        self.country.set(draft.country.clone());
        self.days.set(draft.days.clone());
        self.cost.set(draft.cost.clone());
        self.note.set(draft.note.clone());
        self.field = ExpenseField::Country;
    }

    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            country: self.country.value().to_string(),
            days: self.days.value().to_string(),
            cost: self.cost.value().to_string(),
            note: self.note.value().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackingField {
    #[default]
    Item,
    Category,
}

impl PackingField {
    pub fn toggle(self) -> Self {
        match self {
            PackingField::Item => PackingField::Category,
            PackingField::Category => PackingField::Item,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackingForm {
    pub item: LineEdit,
    pub category: PackingCategory,
    pub field: PackingField,
}

impl PackingForm {
    pub fn load(&mut self, draft: &PackingDraft) {
        self.item.set(draft.item.clone());
        self.category = draft.category;
        self.field = PackingField::Item;
    }

    pub fn to_draft(&self) -> PackingDraft {
        PackingDraft {
            item: self.item.value().to_string(),
            category: self.category,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
