//! Public contact-form submissions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use inkpost_core::inquiry::validate_inquiry;
use inkpost_core::types::DbId;
use inkpost_db::repositories::InquiryRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateInquiryRequest {
    pub source: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateInquiryResponse {
    pub success: bool,
    pub id: DbId,
}

/// POST /api/inquiries
pub async fn create_inquiry(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateInquiryRequest>,
) -> AppResult<(StatusCode, Json<CreateInquiryResponse>)> {
    let valid = validate_inquiry(
        input.source.as_deref(),
        input.name.as_deref(),
        input.email.as_deref(),
        input.message.as_deref(),
    )?;

    let inquiry = InquiryRepo::create(&state.pool, &valid).await?;
    tracing::info!(inquiry_id = inquiry.id, source = %inquiry.source, "Inquiry received");

    Ok((
        StatusCode::CREATED,
        Json(CreateInquiryResponse {
            success: true,
            id: inquiry.id,
        }),
    ))
}
