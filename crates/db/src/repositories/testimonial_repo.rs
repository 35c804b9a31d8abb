//! Repository for the `testimonials` table.

use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, TestimonialCard};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image, quote, sort_order, created_at, updated_at";

/// Provides read access to testimonials plus an insert for seeding.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// All testimonials in display order: `sort_order` ascending, then oldest first.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<TestimonialCard>, sqlx::Error> {
        sqlx::query_as::<_, TestimonialCard>(
            "SELECT name, image, quote FROM testimonials
             ORDER BY sort_order ASC, created_at ASC, id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Insert a testimonial. There is no HTTP route for this.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, image, quote, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.image)
            .bind(&input.quote)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }
}
