//! Repository for the `settings` singleton.
//!
//! The table's primary key is pinned to `1`, so concurrent get-or-create
//! calls race on the same key and the database keeps exactly one row.

use sqlx::PgPool;

use crate::models::settings::Settings;

const COLUMNS: &str = "allow_admin_signup, created_at, updated_at";

/// Provides access to the site-wide settings row.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Return the settings row, creating it with defaults on first access.
    pub async fn get_or_create(pool: &PgPool) -> Result<Settings, sqlx::Error> {
        sqlx::query("INSERT INTO settings (id) VALUES (1) ON CONFLICT (id) DO NOTHING")
            .execute(pool)
            .await?;

        let query = format!("SELECT {COLUMNS} FROM settings WHERE id = 1");
        sqlx::query_as::<_, Settings>(&query)
            .fetch_one(pool)
            .await
    }

    /// Set the signup gate, creating the row if it does not exist yet.
    pub async fn set_allow_admin_signup(
        pool: &PgPool,
        allow: bool,
    ) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (id, allow_admin_signup) VALUES (1, $1)
             ON CONFLICT (id) DO UPDATE
                SET allow_admin_signup = EXCLUDED.allow_admin_signup,
                    updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(allow)
            .fetch_one(pool)
            .await
    }
}
