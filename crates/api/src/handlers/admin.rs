//! Handlers for admin accounts: signup, secret-key confirmation, login,
//! logout, and session verification.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use inkpost_core::admin::{normalize_email, required, validate_password_strength};
use inkpost_core::error::CoreError;
use inkpost_core::secret_key::generate_secret_key;
use inkpost_db::models::admin::{Admin, CreateAdmin};
use inkpost_db::repositories::{AdminRepo, SettingsRepo};
use serde::{Deserialize, Serialize};

use crate::auth::cookie::{removal_cookie, session_cookie};
use crate::auth::jwt::generate_session_token;
use crate::auth::password::{hash_credential, verify_credential};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

const SIGNUP_MESSAGE: &str =
    "Admin created. Save your secret key. You will need it to complete setup.";
const SETUP_COMPLETE_MESSAGE: &str = "Setup complete";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/signup` and `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Request body for `POST /admin/confirm-secret`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSecretRequest {
    pub email: Option<String>,
    pub secret_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupAllowedResponse {
    pub allowed: bool,
}

/// Returned once at signup. The plaintext key is never retrievable again.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub message: &'static str,
    pub secret_key: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl SuccessResponse {
    fn ok() -> Self {
        Self {
            success: true,
            message: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/signup-allowed
///
/// Public. Answers `{allowed: false}` with a 500 if settings cannot be read.
pub async fn signup_allowed(
    State(state): State<AppState>,
) -> (StatusCode, Json<SignupAllowedResponse>) {
    match SettingsRepo::get_or_create(&state.pool).await {
        Ok(settings) => (
            StatusCode::OK,
            Json(SignupAllowedResponse {
                allowed: settings.allow_admin_signup,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read settings for signup check");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SignupAllowedResponse { allowed: false }),
            )
        }
    }
}

/// POST /api/admin/signup
///
/// Create an admin pending secret-key confirmation and return the
/// plaintext secret key.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    // 1. The signup gate.
    let settings = SettingsRepo::get_or_create(&state.pool).await?;
    if !settings.allow_admin_signup {
        return Err(AppError::Core(CoreError::Forbidden(
            "New admin signup is currently disabled.".into(),
        )));
    }

    // 2. Input validation.
    let (email, password) = email_and_password(&input)?;
    validate_password_strength(password)?;
    let email = normalize_email(email);

    // 3. Uniqueness (the unique constraint catches concurrent duplicates).
    if AdminRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(duplicate_admin());
    }

    // 4. Hash the password and a fresh secret key, each with its own salt.
    let secret_key = generate_secret_key();
    let password_hash = hash_credential(password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let secret_key_hash = hash_credential(&secret_key)
        .map_err(|e| AppError::InternalError(format!("Secret key hashing error: {e}")))?;

    let input = CreateAdmin {
        email,
        password_hash,
        secret_key_hash,
    };
    let admin = match AdminRepo::create(&state.pool, &input).await {
        Ok(admin) => admin,
        Err(e) if is_unique_violation(&e, "uq_admins_email") => return Err(duplicate_admin()),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(admin_id = admin.id, email = %admin.email, "Admin created");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: SIGNUP_MESSAGE,
            secret_key,
            email: admin.email,
        }),
    ))
}

/// POST /api/admin/confirm-secret
///
/// Consume the one-time secret key, activate the account, and start a session.
pub async fn confirm_secret(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<ConfirmSecretRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let (Some(email), Some(secret_key)) = (
        required(input.email.as_deref()),
        required(input.secret_key.as_deref()),
    ) else {
        return Err(AppError::Core(CoreError::Validation(
            "Email and secret key required".into(),
        )));
    };
    let email = normalize_email(email);

    let admin = AdminRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| {
            tracing::warn!(email = %email, "Secret confirmation for unknown admin");
            AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
        })?;

    if admin.secret_key_used {
        return Err(secret_already_used());
    }

    let valid = verify_credential(secret_key, &admin.secret_key_hash)
        .map_err(|e| AppError::InternalError(format!("Secret key verification error: {e}")))?;
    if !valid {
        tracing::warn!(admin_id = admin.id, "Invalid secret key presented");
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid secret key".into(),
        )));
    }

    // Only one concurrent confirmation can flip the flag.
    if !AdminRepo::mark_secret_key_used(&state.pool, admin.id).await? {
        return Err(secret_already_used());
    }

    tracing::info!(admin_id = admin.id, "Secret key confirmed, account active");

    let jar = start_session(&state, jar, &admin)?;
    Ok((
        jar,
        Json(SuccessResponse {
            success: true,
            message: Some(SETUP_COMPLETE_MESSAGE),
        }),
    ))
}

/// POST /api/admin/login
///
/// Email + password login. The confirmation state is not checked.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(input): AppJson<CredentialsRequest>,
) -> AppResult<(CookieJar, Json<SuccessResponse>)> {
    let (email, password) = email_and_password(&input)?;
    let email = normalize_email(email);

    let Some(admin) = AdminRepo::find_by_email(&state.pool, &email).await? else {
        tracing::warn!(email = %email, "Login for unknown admin");
        return Err(invalid_login());
    };

    let valid = verify_credential(password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(admin_id = admin.id, "Login with wrong password");
        return Err(invalid_login());
    }

    tracing::info!(admin_id = admin.id, "Admin logged in");

    let jar = start_session(&state, jar, &admin)?;
    Ok((jar, Json(SuccessResponse::ok())))
}

/// POST /api/admin/logout
///
/// Clears the session cookie. The token itself stays valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<SuccessResponse>) {
    (
        jar.add(removal_cookie(&state.config)),
        Json(SuccessResponse::ok()),
    )
}

/// GET /api/admin/verify
///
/// `{valid: true}` for a valid session cookie, otherwise 401 `{valid: false}`.
pub async fn verify(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (StatusCode, Json<VerifyResponse>) {
    match AdminSession::from_jar(&jar, &state.config) {
        Ok(_) => (StatusCode::OK, Json(VerifyResponse { valid: true })),
        Err(_) => (StatusCode::UNAUTHORIZED, Json(VerifyResponse { valid: false })),
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Both fields must be present; email must not be blank, password not empty.
fn email_and_password(input: &CredentialsRequest) -> AppResult<(&str, &str)> {
    let email = required(input.email.as_deref());
    let password = input.password.as_deref().filter(|p| !p.is_empty());
    match (email, password) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(AppError::Core(CoreError::Validation(
            "Email and password required".into(),
        ))),
    }
}

/// Issue a session token for `admin` and add the session cookie to `jar`.
fn start_session(state: &AppState, jar: CookieJar, admin: &Admin) -> AppResult<CookieJar> {
    let token = generate_session_token(admin.id, &admin.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    Ok(jar.add(session_cookie(token, &state.config)))
}

fn duplicate_admin() -> AppError {
    AppError::Core(CoreError::Conflict(
        "Admin with this email already exists".into(),
    ))
}

fn secret_already_used() -> AppError {
    AppError::Core(CoreError::AlreadyUsed(
        "Secret key already used. Please log in.".into(),
    ))
}

/// Same error for an unknown email and a wrong password.
fn invalid_login() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn creds(email: Option<&str>, password: Option<&str>) -> CredentialsRequest {
        CredentialsRequest {
            email: email.map(str::to_string),
            password: password.map(str::to_string),
        }
    }

    #[test]
    fn missing_fields_are_rejected() {
        for input in [
            creds(None, Some("password1")),
            creds(Some("a@x.com"), None),
            creds(Some("  "), Some("password1")),
            creds(Some("a@x.com"), Some("")),
        ] {
            assert_matches!(
                email_and_password(&input),
                Err(AppError::Core(CoreError::Validation(msg))) if msg == "Email and password required"
            );
        }
    }

    #[test]
    fn present_fields_pass_through() {
        let input = creds(Some("A@X.com"), Some("password1"));
        assert_eq!(email_and_password(&input).unwrap(), ("A@X.com", "password1"));
    }

    #[test]
    fn login_failures_share_one_message() {
        assert_matches!(
            invalid_login(),
            AppError::Core(CoreError::Unauthorized(msg)) if msg == "Invalid email or password"
        );
    }
}
