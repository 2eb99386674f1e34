use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::WorkService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Work item operations over the configured store.
    pub works: WorkService,
}
