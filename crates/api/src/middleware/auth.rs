//! Cookie-based session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use inkpost_core::error::CoreError;
use inkpost_core::types::DbId;

use crate::auth::cookie::session_token;
use crate::auth::jwt::validate_token;
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::state::AppState;

/// The signed-in admin, taken from a valid `adminToken` cookie.
///
/// Use this as an extractor parameter in any handler that requires an admin:
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = session.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    /// The admin's internal database id (from `claims.sub`).
    pub admin_id: DbId,
    /// The admin's email at the time the token was issued.
    pub email: String,
}

impl AdminSession {
    /// Resolve the session from a cookie jar.
    ///
    /// A missing, malformed, forged or expired token all produce the same
    /// `Unauthorized` error.
    pub fn from_jar(jar: &CookieJar, config: &ServerConfig) -> Result<Self, AppError> {
        let token = session_token(jar).ok_or_else(unauthorized)?;
        let claims = validate_token(token, &config.jwt).map_err(|_| unauthorized())?;
        Ok(Self {
            admin_id: claims.sub,
            email: claims.email,
        })
    }
}

fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized("Unauthorized".into()))
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Self::from_jar(&jar, &state.config)
    }
}
