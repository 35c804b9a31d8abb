//! Site-wide settings singleton.

use inkpost_core::types::Timestamp;
use sqlx::FromRow;

/// The single row of the `settings` table.
#[derive(Debug, Clone, FromRow)]
pub struct Settings {
    pub allow_admin_signup: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
