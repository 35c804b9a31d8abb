use axum::extract::State;
use axum::Json;
use inkpost_db::models::testimonial::TestimonialCard;
use inkpost_db::repositories::TestimonialRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<TestimonialCard>,
}

/// GET /api/testimonials
pub async fn list_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<TestimonialsResponse>> {
    let testimonials = TestimonialRepo::list_public(&state.pool).await?;
    Ok(Json(TestimonialsResponse { testimonials }))
}
