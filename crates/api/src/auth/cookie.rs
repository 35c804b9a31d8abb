//! The `adminToken` session cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::ServerConfig;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "adminToken";

/// Build the session cookie for a freshly issued token.
///
/// HttpOnly, SameSite=Strict, scoped to `/`, expiring with the token.
pub fn session_cookie(token: String, config: &ServerConfig) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(config.cookie_secure);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_max_age(time::Duration::seconds(config.jwt.session_expiry_secs()));
    cookie
}

/// An expired, empty session cookie that makes the browser drop the session.
///
/// Path and flags match [`session_cookie`] so the browser treats it as the
/// same cookie.
pub fn removal_cookie(config: &ServerConfig) -> Cookie<'static> {
    let mut cookie = Cookie::from(SESSION_COOKIE);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(config.cookie_secure);
    cookie.set_same_site(SameSite::Strict);
    cookie.make_removal();
    cookie
}

/// The raw session token from the request cookies, if any.
pub fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(SESSION_COOKIE).map(Cookie::value)
}
