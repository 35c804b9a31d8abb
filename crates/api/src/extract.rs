//! Request extractors whose rejections go through [`AppError`].
//!
//! axum's own `Json` and `Path` answer malformed input with a plain-text
//! body that echoes serde's message. These wrappers turn every rejection
//! into the usual `{error, code}` 400.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Use in place of `axum::Json` on the input side.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters. Use in place of `axum::extract::Path`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
