//! Repository for the `inquiries` table.

use sqlx::PgPool;

use crate::models::inquiry::{CreateInquiry, Inquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, source, name, email, message, read, created_at";

/// Write-only access to contact-form inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Insert a validated inquiry. `read` starts as `false`.
    pub async fn create(pool: &PgPool, input: &CreateInquiry) -> Result<Inquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO inquiries (source, name, email, message)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Inquiry>(&query)
            .bind(input.source.as_str())
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }
}
