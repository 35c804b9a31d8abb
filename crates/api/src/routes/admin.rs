//! Route definitions for `/admin` accounts, settings, and uploads.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use inkpost_core::blob::MAX_UPLOAD_BYTES;

use crate::handlers::{admin, settings, uploads};
use crate::state::AppState;

/// Upload bodies may carry a full-size image plus multipart framing.
const UPLOAD_BODY_LIMIT: usize = MAX_UPLOAD_BYTES + 1024 * 1024;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET   /signup-allowed    -> signup_allowed
/// POST  /signup            -> signup
/// POST  /confirm-secret    -> confirm_secret
/// POST  /login             -> login
/// POST  /logout            -> logout
/// GET   /verify            -> verify
/// GET   /settings          -> get_settings (requires session)
/// PATCH /settings          -> update_settings (requires session)
/// POST  /upload-thumbnail  -> upload_thumbnail (requires session)
/// POST  /upload-image      -> upload_content_image (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signup-allowed", get(admin::signup_allowed))
        .route("/signup", post(admin::signup))
        .route("/confirm-secret", post(admin::confirm_secret))
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/verify", get(admin::verify))
        .route(
            "/settings",
            get(settings::get_settings).patch(settings::update_settings),
        )
        .route(
            "/upload-thumbnail",
            post(uploads::upload_thumbnail).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .route(
            "/upload-image",
            post(uploads::upload_content_image).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
}
