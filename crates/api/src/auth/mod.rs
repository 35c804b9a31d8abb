//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing for passwords and one-time secret keys.
//! - [`jwt`] -- Session-token generation and validation.
//! - [`cookie`] -- The `adminToken` session cookie.

pub mod cookie;
pub mod jwt;
pub mod password;
