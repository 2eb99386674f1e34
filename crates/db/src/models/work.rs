//! Work item row model.

use serde::Serialize;
use sqlx::FromRow;
use todo_core::types::{Date, DbId};
use todo_core::work::{WorkDraft, WorkStatus};

/// A row from the `works` table.
///
/// Serialized with camelCase keys and the status by name, e.g.
/// `{"id":1,"workName":"Task1","startDate":"2019-12-03",...}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: DbId,
    pub work_name: String,
    pub start_date: Date,
    pub end_date: Date,
    #[sqlx(try_from = "String")]
    pub status: WorkStatus,
}

impl Work {
    /// Materialise a draft under the given id.
    pub fn from_draft(id: DbId, draft: WorkDraft) -> Self {
        Self {
            id,
            work_name: draft.work_name,
            start_date: draft.start_date,
            end_date: draft.end_date,
            status: draft.status,
        }
    }
}
