//! Handlers for the work item resource.
//!
//! Extractor rejections are taken as `Result` and converted with `?` so a
//! malformed path, query, or body yields the JSON 400 from [`AppError`]
//! rather than axum's plain-text default. Update and delete check existence
//! before anything else, so an unknown id is a 404 even when the body is
//! also bad.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_core::work::{WorkDraft, WorkPayload, WORK_ENTITY};
use todo_db::models::work::Work;

use crate::error::{AppError, AppResult};
use crate::query::ListWorksParams;
use crate::services::WorkService;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a work exists, returning the full row.
async fn ensure_work_exists(works: &WorkService, id: DbId) -> AppResult<Work> {
    works.get_work(id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: WORK_ENTITY,
            id,
        })
    })
}

/// Unwrap a bound body and run field validation on it.
fn validated_draft(body: Result<Json<WorkPayload>, JsonRejection>) -> AppResult<WorkDraft> {
    let Json(payload) = body?;
    payload
        .into_draft()
        .map_err(|violations| AppError::Core(CoreError::InvalidFields(violations)))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/works
///
/// List one page of works. Defaults: `pageNo=0`, `pageSize=100`,
/// `sortBy=id`, `sortDirection=DESC`.
pub async fn list_works(
    State(state): State<AppState>,
    params: Result<Query<ListWorksParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let page = params.into_page_request()?;

    let works = state.works.list_works(&page).await?;
    tracing::debug!(
        count = works.len(),
        page_no = page.page_no,
        page_size = page.page_size,
        sort_by = page.sort_by.as_str(),
        direction = page.direction.as_sql(),
        "Listed works",
    );

    Ok(Json(works))
}

/// GET /api/v1/works/{id}
pub async fn get_work(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    let work = ensure_work_exists(&state.works, id).await?;
    Ok(Json(work))
}

/// POST /api/v1/works
///
/// Create a work. Responds 200 with the stored record and its new id.
pub async fn create_work(
    State(state): State<AppState>,
    body: Result<Json<WorkPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let draft = validated_draft(body)?;
    let work = state.works.create_work(draft).await?;

    tracing::info!(work_id = work.id, status = %work.status, "Work created");

    Ok(Json(work))
}

/// PUT /api/v1/works/{id}
///
/// Replace every field of an existing work. An id inside the body is
/// ignored in favour of the path id.
pub async fn update_work(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    body: Result<Json<WorkPayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    ensure_work_exists(&state.works, id).await?;

    let draft = validated_draft(body)?;
    let work = state.works.update_work(id, draft).await?;

    tracing::info!(work_id = id, status = %work.status, "Work updated");

    Ok(Json(work))
}

/// DELETE /api/v1/works/{id}
///
/// Responds 200 with an empty body.
pub async fn delete_work(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    let Path(id) = id?;
    ensure_work_exists(&state.works, id).await?;

    state.works.delete_work(id).await?;

    tracing::info!(work_id = id, "Work deleted");

    Ok(StatusCode::OK)
}
