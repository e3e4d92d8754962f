use std::sync::Arc;

use crate::config::ServerConfig;
use crate::views::ViewEngine;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: scribble_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Compiled template engine.
    pub views: Arc<ViewEngine>,
}
