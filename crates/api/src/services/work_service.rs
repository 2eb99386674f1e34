//! Work item operations.
//!
//! Thin delegation to the [`WorkStore`] port. The service owns exactly one
//! rule: which id a saved record gets. Create always lets the store assign
//! one; update always uses the caller's id. Existence checks belong to the
//! handlers.

use std::sync::Arc;

use todo_core::paging::PageRequest;
use todo_core::types::DbId;
use todo_core::work::WorkDraft;
use todo_db::models::work::Work;
use todo_db::repositories::WorkStore;

#[derive(Clone)]
pub struct WorkService {
    store: Arc<dyn WorkStore>,
}

impl WorkService {
    pub fn new(store: Arc<dyn WorkStore>) -> Self {
        Self { store }
    }

    /// One page of works. Out-of-range pages are empty, not errors.
    pub async fn list_works(&self, page: &PageRequest) -> Result<Vec<Work>, sqlx::Error> {
        self.store.find_page(page).await
    }

    pub async fn get_work(&self, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        self.store.find_by_id(id).await
    }

    /// Insert a new work. Any id on the draft is discarded.
    pub async fn create_work(&self, mut draft: WorkDraft) -> Result<Work, sqlx::Error> {
        draft.id = None;
        self.store.save(draft).await
    }

    /// Replace every field of work `id` with the draft's values.
    ///
    /// Does not check that `id` exists.
    pub async fn update_work(&self, id: DbId, mut draft: WorkDraft) -> Result<Work, sqlx::Error> {
        draft.id = Some(id);
        self.store.save(draft).await
    }

    pub async fn delete_work(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.store.delete_by_id(id).await
    }

    /// Whether the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}
