//! Request extractors for authenticated routes.
//!
//! - [`auth::AdminSession`] -- Extracts the signed-in admin from the session cookie.

pub mod auth;
