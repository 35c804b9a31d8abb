use std::sync::Arc;

use inkpost_core::blob::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: inkpost_db::DbPool,
    /// Server configuration (session settings, cookie flags).
    pub config: Arc<ServerConfig>,
    /// Object storage for uploaded images.
    pub blob_store: Arc<dyn BlobStore>,
}
