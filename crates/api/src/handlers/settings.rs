//! Handlers for the site-wide settings singleton.

use axum::extract::State;
use axum::Json;
use inkpost_db::models::settings::Settings;
use inkpost_db::repositories::SettingsRepo;
use serde::Serialize;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub allow_admin_signup: bool,
}

impl From<Settings> for SettingsResponse {
    fn from(settings: Settings) -> Self {
        Self {
            allow_admin_signup: settings.allow_admin_signup,
        }
    }
}

/// GET /api/admin/settings
pub async fn get_settings(
    State(state): State<AppState>,
    _session: AdminSession,
) -> AppResult<Json<SettingsResponse>> {
    let settings = SettingsRepo::get_or_create(&state.pool).await?;
    Ok(Json(settings.into()))
}

/// PATCH /api/admin/settings
///
/// Only a boolean `allowAdminSignup` is applied; every other field, and a
/// non-boolean value, is ignored.
pub async fn update_settings(
    State(state): State<AppState>,
    session: AdminSession,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<SettingsResponse>> {
    let settings = match signup_toggle(&body) {
        Some(allow) => {
            let settings = SettingsRepo::set_allow_admin_signup(&state.pool, allow).await?;
            tracing::info!(
                admin_id = session.admin_id,
                allow_admin_signup = allow,
                "Settings updated"
            );
            settings
        }
        None => SettingsRepo::get_or_create(&state.pool).await?,
    };
    Ok(Json(settings.into()))
}

fn signup_toggle(body: &Value) -> Option<bool> {
    body.get("allowAdminSignup").and_then(Value::as_bool)
}
