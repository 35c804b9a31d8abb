//! Testimonial model and public projection.

use inkpost_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub image: String,
    pub quote: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Public projection used on the marketing site.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TestimonialCard {
    pub name: String,
    pub image: String,
    pub quote: String,
}

/// DTO for inserting a testimonial through direct store access.
#[derive(Debug)]
pub struct CreateTestimonial {
    pub name: String,
    pub image: String,
    pub quote: String,
    pub sort_order: i32,
}
