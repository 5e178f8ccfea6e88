//! Packing checklist state: cached items, the form and its pending-edit marker.

use voyage_core::AppError;

use crate::client::TravelClient;
use crate::expense::RecordId;
use crate::outcome::{Confirmation, DeleteOutcome, SubmitOutcome};
use crate::packing::{self, CategoryGroup, PackingDraft, PackingItem, Progress};

pub const DELETE_PACKING_PROMPT: &str = "Delete this packing item?";

#[derive(Debug)]
pub struct PackingManager {
    client: TravelClient,
    items: Vec<PackingItem>,
    draft: PackingDraft,
    editing: Option<RecordId>,
}

impl PackingManager {
    pub fn new(client: TravelClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            draft: PackingDraft::default(),
            editing: None,
        }
    }

    pub fn items(&self) -> &[PackingItem] {
        &self.items
    }

    pub fn get(&self, id: RecordId) -> Option<&PackingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn draft(&self) -> &PackingDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut PackingDraft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    /// Non-empty categories in display order, recomputed from the cached list.
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        packing::group_by_category(&self.items)
    }

    pub fn progress(&self) -> Progress {
        Progress::of(&self.items)
    }

    /// Replace the cached list with the server's. Failures keep the old list.
    pub async fn list(&mut self) {
        match self.client.list_packing(None).await {
            Ok(items) => self.items = items,
            Err(e) => tracing::warn!("Failed to load packing list: {}", e),
        }
    }

    pub async fn create(&mut self, draft: &PackingDraft) -> Result<PackingItem, AppError> {
        let request = draft.to_request()?;

        let created = self.client.create_packing(&request).await.map_err(|e| {
            tracing::error!("Failed to save packing item: {}", e);
            AppError::from(e)
        })?;

        tracing::info!("Created packing item {} ({})", created.id, created.item);
        self.list().await;
        Ok(created)
    }

    pub async fn update(&mut self, id: RecordId, draft: &PackingDraft) -> Result<PackingItem, AppError> {
        let request = draft.to_request()?;

        let updated = self.client.update_packing(id, &request).await.map_err(|e| {
            tracing::error!("Failed to update packing item {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Updated packing item {}", id);
        self.list().await;
        Ok(updated)
    }

    /// Submit the form: update when an edit is pending, create otherwise.
    pub async fn submit(&mut self) -> Result<SubmitOutcome<PackingItem>, AppError> {
        let draft = self.draft.clone();

        let outcome = match self.editing {
            Some(id) => SubmitOutcome::Updated(self.update(id, &draft).await?),
            None => SubmitOutcome::Created(self.create(&draft).await?),
        };

        self.draft = PackingDraft::default();
        self.editing = None;
        Ok(outcome)
    }

    pub fn begin_edit(&mut self, id: RecordId) -> bool {
        let Some(item) = self.get(id) else {
            return false;
        };
        self.draft = PackingDraft::from_item(item);
        self.editing = Some(id);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.draft = PackingDraft::default();
        self.editing = None;
    }

    /// Flip `checked` on the server, then re-list. The cached item is never
    /// flipped locally.
    pub async fn toggle(&mut self, id: RecordId) -> Result<PackingItem, AppError> {
        let toggled = self.client.toggle_packing(id).await.map_err(|e| {
            tracing::warn!("Failed to toggle packing item {}: {}", id, e);
            AppError::from(e)
        })?;

        self.list().await;
        Ok(toggled)
    }

    pub async fn delete(
        &mut self,
        id: RecordId,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, AppError> {
        if confirmation == Confirmation::Declined {
            tracing::debug!("Delete of packing item {} declined", id);
            return Ok(DeleteOutcome::Cancelled);
        }

        self.client.delete_packing(id).await.map_err(|e| {
            tracing::error!("Failed to delete packing item {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Deleted packing item {}", id);
        if self.editing == Some(id) {
            self.cancel_edit();
        }
        self.list().await;
        Ok(DeleteOutcome::Deleted)
    }
}
