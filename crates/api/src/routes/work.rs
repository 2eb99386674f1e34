//! Route definitions for the work item resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::work;
use crate::state::AppState;

/// Work routes mounted at `/works`.
///
/// ```text
/// GET    /              -> list_works
/// POST   /              -> create_work
/// GET    /{id}          -> get_work
/// PUT    /{id}          -> update_work
/// DELETE /{id}          -> delete_work
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(work::list_works).post(work::create_work))
        .route(
            "/{id}",
            get(work::get_work)
                .put(work::update_work)
                .delete(work::delete_work),
        )
}
