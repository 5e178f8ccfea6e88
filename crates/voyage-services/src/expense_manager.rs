//! Expense ledger state: the cached record list, the stats snapshot and the
//! form with its pending-edit marker.
//!
//! The cached list is treated as stale after every mutation and re-fetched in
//! full; nothing is merged locally.

use voyage_core::AppError;

use crate::client::TravelClient;
use crate::expense::{self, Expense, ExpenseDraft, ExpenseStats, RecordId};
use crate::outcome::{Confirmation, DeleteOutcome, SubmitOutcome};

pub const DELETE_EXPENSE_PROMPT: &str = "Delete this expense record?";

#[derive(Debug)]
pub struct ExpenseManager {
    client: TravelClient,
    expenses: Vec<Expense>,
    stats: Option<ExpenseStats>,
    draft: ExpenseDraft,
    editing: Option<RecordId>,
}

impl ExpenseManager {
    pub fn new(client: TravelClient) -> Self {
        Self {
            client,
            expenses: Vec::new(),
            stats: None,
            draft: ExpenseDraft::default(),
            editing: None,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: RecordId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn stats(&self) -> Option<&ExpenseStats> {
        self.stats.as_ref()
    }

    pub fn draft(&self) -> &ExpenseDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ExpenseDraft {
        &mut self.draft
    }

    /// Id of the record the form will update on submit.
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn total_cost(&self) -> f64 {
        expense::total_cost(&self.expenses)
    }

    pub fn average_cost(&self) -> Option<f64> {
        expense::average_cost(&self.expenses)
    }

    /// Replace the cached list with the server's. Failures keep the old list.
    pub async fn list(&mut self) {
        match self.client.list_expenses().await {
            Ok(expenses) => self.expenses = expenses,
            Err(e) => tracing::warn!("Failed to load expenses: {}", e),
        }
    }

    /// Replace the stats snapshot. Failures keep the old snapshot.
    pub async fn load_stats(&mut self) {
        match self.client.expense_stats().await {
            Ok(stats) => self.stats = Some(stats),
            Err(e) => tracing::warn!("Failed to load expense stats: {}", e),
        }
    }

    /// Re-fetch the list, then the stats.
    pub async fn refresh(&mut self) {
        self.list().await;
        self.load_stats().await;
    }

    /// Create a record from `draft`. Validation failures send nothing.
    pub async fn create(&mut self, draft: &ExpenseDraft) -> Result<Expense, AppError> {
        let request = draft.to_request()?;

        let created = self.client.create_expense(&request).await.map_err(|e| {
            tracing::error!("Failed to save expense: {}", e);
            AppError::from(e)
        })?;

        tracing::info!("Created expense {} ({})", created.id, created.country);
        self.refresh().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: RecordId, draft: &ExpenseDraft) -> Result<Expense, AppError> {
        let request = draft.to_request()?;

        let updated = self.client.update_expense(id, &request).await.map_err(|e| {
            tracing::error!("Failed to update expense {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Updated expense {}", id);
        self.refresh().await;
        Ok(updated)
    }

    /// Submit the form: update when an edit is pending, create otherwise.
    ///
    /// The form and the edit marker are cleared only on success.
    pub async fn submit(&mut self) -> Result<SubmitOutcome<Expense>, AppError> {
        let draft = self.draft.clone();

        let outcome = match self.editing {
            Some(id) => SubmitOutcome::Updated(self.update(id, &draft).await?),
            None => SubmitOutcome::Created(self.create(&draft).await?),
        };

        self.draft = ExpenseDraft::default();
        self.editing = None;
        Ok(outcome)
    }

    /// Load a cached record into the form. Returns false for an unknown id.
    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let Some(expense) = self.get(id) else {
            return false;
        };
        self.draft = ExpenseDraft::from_expense(expense);
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.draft = ExpenseDraft::default();
        self.editing = None;
    }

    /// Delete a record once the user has confirmed `DELETE_EXPENSE_PROMPT`.
    pub async fn delete(
        &mut self,
        id: RecordId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, AppError> {
        if confirmation == Confirmation::Declined {
            tracing::debug!("Delete of expense {} declined", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        self.client.delete_expense(id).await.map_err(|e| {
            tracing::error!("Failed to delete expense {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Deleted expense {}", id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.refresh().await;
        Ok(DeleteOutcome::Deleted)
    }
}
