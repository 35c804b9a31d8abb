use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Public routes mounted at `/testimonials`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(testimonials::list_testimonials))
}
