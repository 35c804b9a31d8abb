//! Liveness and dependency report at `GET /health`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Reachability of the services the API depends on.
#[derive(Debug, Serialize)]
pub struct DependencyChecks {
    pub database: bool,
    /// Object storage has credentials and a bucket. No request is made.
    pub storage: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every check passes, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: DependencyChecks,
}

impl HealthReport {
    fn new(checks: DependencyChecks) -> Self {
        let status = if checks.database && checks.storage {
            "ok"
        } else {
            "degraded"
        };
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let checks = DependencyChecks {
        database: inkpost_db::health_check(&state.pool).await.is_ok(),
        storage: state.blob_store.is_configured(),
    };
    if !checks.database {
        tracing::warn!("Health check could not reach the database");
    }
    Json(HealthReport::new(checks))
}

/// Mounted at the root, outside `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
