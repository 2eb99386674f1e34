//! Persistence port for work items and its Postgres implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use todo_core::paging::{PageRequest, WorkSortField};
use todo_core::types::DbId;
use todo_core::work::WorkDraft;

use crate::models::work::Work;

/// Column list for `works` queries.
const COLUMNS: &str = "id, work_name, start_date, end_date, status";

/// Paged/sorted retrieval, lookup, upsert and delete over work records.
///
/// Implementations hold no business rules: `save` never checks whether a
/// record exists and `delete_by_id` succeeds for unknown ids.
#[async_trait]
pub trait WorkStore: Send + Sync {
    /// One page of works ordered by the requested field and direction.
    ///
    /// Ties are broken by ascending id. A page past the end of the data is
    /// an empty vector.
    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Work>, sqlx::Error>;

    /// Find a work by its ID.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Work>, sqlx::Error>;

    /// Insert when `draft.id` is `None`, otherwise replace the record with
    /// that id in full (inserting it if absent).
    ///
    /// An explicit id at or above the next generated id moves id
    /// generation past it, so later inserts never collide.
    async fn save(&self, draft: WorkDraft) -> Result<Work, sqlx::Error>;

    /// Delete a work by ID. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// Provides data access for the `works` table.
#[derive(Debug, Clone)]
pub struct WorkRepo {
    pool: PgPool,
}

impl WorkRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `ORDER BY` expression for a sort field.
///
/// Text columns sort with the "C" collation so the order is plain byte
/// order whatever the database locale is.
fn order_expr(field: WorkSortField) -> String {
    match field {
        WorkSortField::WorkName | WorkSortField::Status => {
            format!("{} COLLATE \"C\"", field.column())
        }
        _ => field.column().to_string(),
    }
}

#[async_trait]
impl WorkStore for WorkRepo {
    async fn find_page(&self, page: &PageRequest) -> Result<Vec<Work>, sqlx::Error> {
        // An offset past i64::MAX is necessarily past the last row.
        let Ok(offset) = i64::try_from(page.offset()) else {
            return Ok(Vec::new());
        };

        let query = format!(
            "SELECT {COLUMNS} FROM works \
             ORDER BY {} {}, id ASC \
             LIMIT $1 OFFSET $2",
            order_expr(page.sort_by),
            page.direction.as_sql(),
        );
        sqlx::query_as::<_, Work>(&query)
            .bind(i64::from(page.page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Work>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM works WHERE id = $1");
        sqlx::query_as::<_, Work>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn save(&self, draft: WorkDraft) -> Result<Work, sqlx::Error> {
        match draft.id {
            None => {
                let query = format!(
                    "INSERT INTO works (work_name, start_date, end_date, status) \
                     VALUES ($1, $2, $3, $4) \
                     RETURNING {COLUMNS}"
                );
                sqlx::query_as::<_, Work>(&query)
                    .bind(&draft.work_name)
                    .bind(draft.start_date)
                    .bind(draft.end_date)
                    .bind(draft.status.as_str())
                    .fetch_one(&self.pool)
                    .await
            }
            Some(id) => {
                let query = format!(
                    "INSERT INTO works (id, work_name, start_date, end_date, status) \
                     VALUES ($1, $2, $3, $4, $5) \
                     ON CONFLICT (id) DO UPDATE SET \
                         work_name = EXCLUDED.work_name, \
                         start_date = EXCLUDED.start_date, \
                         end_date = EXCLUDED.end_date, \
                         status = EXCLUDED.status \
                     RETURNING {COLUMNS}"
                );
                let mut tx = self.pool.begin().await?;
                let work = sqlx::query_as::<_, Work>(&query)
                    .bind(id)
                    .bind(&draft.work_name)
                    .bind(draft.start_date)
                    .bind(draft.end_date)
                    .bind(draft.status.as_str())
                    .fetch_one(&mut *tx)
                    .await?;

                // Keep generated ids ahead of any explicitly written one.
                sqlx::query(
                    "SELECT setval('works_id_seq', $1) \
                     WHERE $1 >= (SELECT last_value FROM works_id_seq)",
                )
                .bind(id)
                .execute(&mut *tx)
                .await?;

                tx.commit().await?;
                Ok(work)
            }
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM works WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!(work_id = id, rows = result.rows_affected(), "Deleted work row");
        Ok(())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
