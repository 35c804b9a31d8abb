//! Route definitions for the owner-scoped `/admin/articles` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::admin_articles;
use crate::state::AppState;

/// Routes mounted at `/admin/articles`.
///
/// ```text
/// GET    /                 -> list_articles
/// POST   /                 -> create_article
/// GET    /{id}             -> get_article
/// PUT    /{id}             -> update_article
/// DELETE /{id}             -> delete_article
/// PATCH  /{id}/publish     -> publish_article
/// PATCH  /{id}/unpublish   -> unpublish_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(admin_articles::list_articles).post(admin_articles::create_article),
        )
        .route(
            "/{id}",
            get(admin_articles::get_article)
                .put(admin_articles::update_article)
                .delete(admin_articles::delete_article),
        )
        .route("/{id}/publish", patch(admin_articles::publish_article))
        .route("/{id}/unpublish", patch(admin_articles::unpublish_article))
}
