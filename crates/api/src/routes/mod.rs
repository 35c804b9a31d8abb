pub mod admin;
pub mod admin_articles;
pub mod articles;
pub mod health;
pub mod inquiries;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/signup-allowed                 signup gate (public)
/// /admin/signup                         create admin (public, gated)
/// /admin/confirm-secret                 consume secret key, start session
/// /admin/login                          password login, start session
/// /admin/logout                         clear session cookie
/// /admin/verify                         check session cookie
/// /admin/settings                       get, patch (session required)
/// /admin/upload-thumbnail               multipart image upload (session required)
/// /admin/upload-image                   multipart image upload (session required)
///
/// /admin/articles                       list, create (owner-scoped)
/// /admin/articles/{id}                  get, update, delete (owner-scoped)
/// /admin/articles/{id}/publish          publish (PATCH)
/// /admin/articles/{id}/unpublish        unpublish (PATCH)
///
/// /articles                             published list (public)
/// /articles/{id}                        published article (public)
///
/// /testimonials                         list (public)
///
/// /inquiries                            create (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/admin", admin::router().nest("/articles", admin_articles::router()))
        .nest("/articles", articles::router())
        .nest("/testimonials", testimonials::router())
        .nest("/inquiries", inquiries::router())
}
