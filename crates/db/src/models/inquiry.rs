//! Contact-form inquiry model.

use inkpost_core::inquiry::ValidInquiry;
use inkpost_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `inquiries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: DbId,
    pub source: String,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Never set by any current operation.
    pub read: bool,
    pub created_at: Timestamp,
}

/// DTO for inserting an inquiry.
pub type CreateInquiry = ValidInquiry;
