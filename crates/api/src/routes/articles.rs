use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Public routes mounted at `/articles`.
///
/// ```text
/// GET /       -> list_published
/// GET /{id}   -> get_published
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(articles::list_published))
        .route("/{id}", get(articles::get_published))
}
