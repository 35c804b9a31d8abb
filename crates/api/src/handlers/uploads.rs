//! Image upload handlers. Files go to the configured [`BlobStore`].
//!
//! [`BlobStore`]: inkpost_core::blob::BlobStore

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use inkpost_core::blob::{upload_image, FOLDER_THUMBNAILS};
use inkpost_core::error::CoreError;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/admin/upload-thumbnail (multipart field `thumbnail`)
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    session: AdminSession,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    store_upload(&state, &session, multipart, "thumbnail").await
}

/// POST /api/admin/upload-image (multipart field `image`)
pub async fn upload_content_image(
    State(state): State<AppState>,
    session: AdminSession,
    multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    store_upload(&state, &session, multipart, "image").await
}

/// Read the single file in `field_name`, validate it, and store it.
async fn store_upload(
    state: &AppState,
    session: &AdminSession,
    mut multipart: Multipart,
    field_name: &str,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(field_name) {
            continue; // ignore unknown fields
        }
        let mime = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        file = Some((mime, data.to_vec()));
    }

    let (mime, data) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;
    let size = data.len();

    let url = upload_image(state.blob_store.as_ref(), FOLDER_THUMBNAILS, data, &mime).await?;

    tracing::info!(admin_id = session.admin_id, %mime, size, %url, "Image uploaded");
    Ok(Json(UploadResponse { url }))
}

/// A body over the route limit reads as an oversized file.
fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Core(CoreError::Validation("File too large. Max 5MB.".into()))
    } else {
        AppError::BadRequest(err.body_text())
    }
}
