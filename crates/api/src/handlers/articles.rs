//! Public, read-only article handlers. Drafts are never visible here.

use axum::extract::{Query, State};
use axum::Json;
use inkpost_core::error::CoreError;
use inkpost_core::pagination::{offset, parse_page, parse_public_limit, PageInfo};
use inkpost_core::types::DbId;
use inkpost_db::models::article::{Article, PublicArticleSummary};
use inkpost_db::repositories::ArticleRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PublicListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PublicArticleListResponse {
    pub articles: Vec<PublicArticleSummary>,
    pub pagination: PageInfo,
}

/// GET /api/articles?limit=&page=
///
/// Published articles, newest first, without their content.
pub async fn list_published(
    State(state): State<AppState>,
    Query(params): Query<PublicListParams>,
) -> AppResult<Json<PublicArticleListResponse>> {
    let page = parse_page(params.page.as_deref());
    let limit = parse_public_limit(params.limit.as_deref());

    let total = ArticleRepo::count_published(&state.pool).await?;
    let articles = ArticleRepo::list_published(&state.pool, limit, offset(page, limit)).await?;

    Ok(Json(PublicArticleListResponse {
        articles,
        pagination: PageInfo::new(page, limit, total),
    }))
}

/// GET /api/articles/{id}
pub async fn get_published(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_published(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Article",
            id,
        }))?;
    Ok(Json(article))
}
