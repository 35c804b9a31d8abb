//! Admin account model and DTOs.

use inkpost_core::admin::AccountState;
use inkpost_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full row from the `admins` table.
///
/// Holds both password and secret-key hashes, so it deliberately does not
/// implement `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    /// Trimmed, lower-cased email.
    pub email: String,
    pub password_hash: String,
    pub secret_key_hash: String,
    pub secret_key_used: bool,
    pub created_at: Timestamp,
}

impl Admin {
    pub fn account_state(&self) -> AccountState {
        AccountState::from_secret_key_used(self.secret_key_used)
    }
}

/// DTO for inserting a new admin. Hashes are computed by the caller.
#[derive(Debug)]
pub struct CreateAdmin {
    /// Must already be normalised with `normalize_email`.
    pub email: String,
    pub password_hash: String,
    pub secret_key_hash: String,
}
