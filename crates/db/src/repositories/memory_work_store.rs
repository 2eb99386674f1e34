//! In-memory [`WorkStore`] backed by an ordered map keyed by id.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use todo_core::paging::{PageRequest, SortDirection, WorkSortField};
use todo_core::types::DbId;
use todo_core::work::WorkDraft;

use super::work_repo::WorkStore;
use crate::models::work::Work;

#[derive(Debug)]
struct Inner {
    rows: BTreeMap<DbId, Work>,
    next_id: DbId,
}

/// Work store that keeps every row in process memory.
///
/// Ids are assigned from 1 upwards. Ordering matches [`super::WorkRepo`]:
/// text fields compare byte-wise, ties fall back to ascending id.
#[derive(Debug)]
pub struct MemoryWorkStore {
    inner: RwLock<Inner>,
}

impl Default for MemoryWorkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryWorkStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Number of stored rows.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn compare_by(field: WorkSortField, a: &Work, b: &Work) -> Ordering {
    match field {
        WorkSortField::Id => a.id.cmp(&b.id),
        WorkSortField::WorkName => a.work_name.cmp(&b.work_name),
        WorkSortField::StartDate => a.start_date.cmp(&b.start_date),
        WorkSortField::EndDate => a.end_date.cmp(&b.end_date),
        WorkSortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

#[async_trait]
impl WorkStore for MemoryWorkStore {
    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Work>, sqlx::Error> {
        let inner = self.inner.read().await;

        let Ok(offset) = usize::try_from(page.offset()) else {
            return Ok(Vec::new());
        };
        if offset >= inner.rows.len() {
            return Ok(Vec::new());
        }

        let mut rows: Vec<&Work> = inner.rows.values().collect();
        rows.sort_by(|a, b| {
            let by_field = compare_by(page.sort_by, a, b);
            let by_field = match page.direction {
                SortDirection::Asc => by_field,
                SortDirection::Desc => by_field.reverse(),
            };
            by_field.then_with(|| a.id.cmp(&b.id))
        });

        Ok(rows
            .into_iter()
            .skip(offset)
            .take(page.page_size as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, draft: WorkDraft) -> Result<Work, sqlx::Error> {
        let mut inner = self.inner.write().await;

        let id = match draft.id {
            Some(id) => id,
            None => inner.next_id,
        };
        if id >= inner.next_id {
            inner.next_id = id + 1;
        }

        let work = Work::from_draft(id, draft);
        inner.rows.insert(id, work.clone());
        Ok(work)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use todo_core::types::Date;
    use todo_core::work::WorkStatus;

    use super::*;

    fn draft(name: &str, day: u32, status: WorkStatus) -> WorkDraft {
        WorkDraft {
            id: None,
            work_name: name.to_string(),
            start_date: Date::from_ymd_opt(2019, 12, day).unwrap(),
            end_date: Date::from_ymd_opt(2019, 12, day + 1).unwrap(),
            status,
        }
    }

    async fn seeded() -> MemoryWorkStore {
        let store = MemoryWorkStore::new();
        store.save(draft("Gamma", 3, WorkStatus::Doing)).await.unwrap();
        store.save(draft("Alpha", 1, WorkStatus::Planning)).await.unwrap();
        store.save(draft("Beta", 2, WorkStatus::Complete)).await.unwrap();
        store
    }

    fn ids(rows: &[Work]) -> Vec<DbId> {
        rows.iter().map(|w| w.id).collect()
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = seeded().await;
        assert_eq!(store.len().await, 3);
        assert!(store.find_by_id(3).await.unwrap().is_some());
        assert!(store.find_by_id(4).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_with_id_replaces_record() {
        let store = seeded().await;
        let mut replacement = draft("Renamed", 9, WorkStatus::Complete);
        replacement.id = Some(2);

        let saved = store.save(replacement).await.unwrap();
        assert_eq!(saved.id, 2);
        assert_eq!(store.len().await, 3);
        assert_eq!(store.find_by_id(2).await.unwrap().unwrap().work_name, "Renamed");
    }

    #[tokio::test]
    async fn save_with_unknown_id_inserts_and_advances_sequence() {
        let store = seeded().await;
        let mut explicit = draft("Explicit", 5, WorkStatus::Doing);
        explicit.id = Some(10);
        store.save(explicit).await.unwrap();

        let next = store.save(draft("Next", 6, WorkStatus::Doing)).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn find_page_sorts_by_field_and_direction() {
        let store = seeded().await;

        let page = PageRequest::default();
        assert_eq!(ids(&store.find_page(&page).await.unwrap()), vec![3, 2, 1]);

        let page = PageRequest {
            sort_by: WorkSortField::WorkName,
            direction: SortDirection::Asc,
            ..PageRequest::default()
        };
        assert_eq!(ids(&store.find_page(&page).await.unwrap()), vec![2, 3, 1]);

        let page = PageRequest {
            sort_by: WorkSortField::Status,
            ..PageRequest::default()
        };
        let rows = store.find_page(&page).await.unwrap();
        assert_eq!(rows[0].status, WorkStatus::Planning);
        assert_eq!(rows[2].status, WorkStatus::Complete);
    }

    #[tokio::test]
    async fn find_page_windows_and_runs_off_the_end() {
        let store = seeded().await;

        let page = PageRequest {
            page_no: 1,
            page_size: 2,
            ..PageRequest::default()
        };
        assert_eq!(ids(&store.find_page(&page).await.unwrap()), vec![1]);

        let page = PageRequest {
            page_no: 5,
            page_size: 2,
            ..PageRequest::default()
        };
        assert!(store.find_page(&page).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ties_break_on_ascending_id() {
        let store = MemoryWorkStore::new();
        for _ in 0..3 {
            store.save(draft("Same", 1, WorkStatus::Doing)).await.unwrap();
        }

        let page = PageRequest {
            sort_by: WorkSortField::Status,
            ..PageRequest::default()
        };
        assert_eq!(ids(&store.find_page(&page).await.unwrap()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = seeded().await;
        store.delete_by_id(1).await.unwrap();
        store.delete_by_id(1).await.unwrap();
        assert_eq!(store.len().await, 2);
        assert!(store.find_by_id(1).await.unwrap().is_none());

        store.delete_by_id(2).await.unwrap();
        store.delete_by_id(3).await.unwrap();
        assert!(store.is_empty().await);
    }
}
