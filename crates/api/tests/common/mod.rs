#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::services::WorkService;
use todo_api::state::AppState;
use todo_core::types::Date;
use todo_core::work::{WorkDraft, WorkStatus};
use todo_db::repositories::{MemoryWorkStore, WorkStore};

pub const WORKS_URL: &str = "/api/v1/works";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// Build the full application router over the given store.
///
/// Uses the same `build_app_router` as `main.rs`, so tests exercise the
/// production middleware stack.
pub fn build_test_app(store: Arc<MemoryWorkStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        works: WorkService::new(store),
    };
    build_app_router(state, &config)
}

fn date(raw: &str) -> Date {
    raw.parse().unwrap()
}

/// Twelve works with ids 1..=12.
///
/// Statuses cycle PLANNING, DOING, COMPLETE. Start dates rise with the id
/// except for id 2, which starts first.
pub async fn seeded_store() -> Arc<MemoryWorkStore> {
    let rows = [
        ("Task1", "2019-12-03", "2019-12-05", WorkStatus::Planning),
        ("Task2", "2019-11-01", "2019-11-20", WorkStatus::Doing),
        ("Task3", "2019-12-10", "2019-12-12", WorkStatus::Complete),
        ("Task4", "2019-12-15", "2019-12-30", WorkStatus::Planning),
        ("Task5", "2020-01-02", "2020-01-04", WorkStatus::Doing),
        ("Task6", "2020-01-05", "2020-01-09", WorkStatus::Complete),
        ("Task7", "2020-01-10", "2020-01-11", WorkStatus::Planning),
        ("Task8", "2020-01-12", "2020-01-20", WorkStatus::Doing),
        ("Task9", "2020-02-01", "2020-02-02", WorkStatus::Complete),
        ("Task10", "2020-02-03", "2020-02-14", WorkStatus::Planning),
        ("Task11", "2020-02-10", "2020-02-11", WorkStatus::Doing),
        ("Task12", "2020-03-01", "2020-03-31", WorkStatus::Complete),
    ];

    let store = Arc::new(MemoryWorkStore::new());
    for (name, start, end, status) in rows {
        store
            .save(WorkDraft {
                id: None,
                work_name: name.to_string(),
                start_date: date(start),
                end_date: date(end),
                status,
            })
            .await
            .unwrap();
    }
    store
}

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(json)).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn post_raw(app: Router, uri: &str, raw: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(raw))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
