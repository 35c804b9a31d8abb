//! Owner-scoped article handlers under `/api/admin/articles`.
//!
//! Every handler passes the session's admin id to the repository, so an
//! article owned by someone else behaves exactly like a missing one (404).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use inkpost_core::article::{
    validate_short_description, validate_title, ArticleFilter, ArticleStatus,
};
use inkpost_core::error::CoreError;
use inkpost_core::pagination::{offset, parse_page, PageInfo, ADMIN_PAGE_SIZE};
use inkpost_core::types::DbId;
use inkpost_db::models::article::{Article, CreateArticle, UpdateArticle};
use inkpost_db::repositories::ArticleRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for the admin list. All parsed leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ListArticlesParams {
    pub page: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
}

/// Partial update. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub pagination: PageInfo,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/admin/articles?page=&search=&status=&sort=
pub async fn list_articles(
    State(state): State<AppState>,
    session: AdminSession,
    Query(params): Query<ListArticlesParams>,
) -> AppResult<Json<ArticleListResponse>> {
    let page = parse_page(params.page.as_deref());
    let filter = ArticleFilter::from_params(
        params.search.as_deref(),
        params.status.as_deref(),
        params.sort.as_deref(),
    );

    let total = ArticleRepo::count_for_author(&state.pool, session.admin_id, &filter).await?;
    let articles = ArticleRepo::list_for_author(
        &state.pool,
        session.admin_id,
        &filter,
        ADMIN_PAGE_SIZE,
        offset(page, ADMIN_PAGE_SIZE),
    )
    .await?;

    Ok(Json(ArticleListResponse {
        articles,
        pagination: PageInfo::new(page, ADMIN_PAGE_SIZE, total),
    }))
}

/// POST /api/admin/articles
///
/// New articles always start as drafts.
pub async fn create_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppJson(input): AppJson<CreateArticleRequest>,
) -> AppResult<(StatusCode, Json<Article>)> {
    let create = CreateArticle {
        title: validate_title(input.title.as_deref())?,
        short_description: validate_short_description(input.short_description.as_deref())?,
        thumbnail: input.thumbnail.unwrap_or_default(),
        content: input.content.unwrap_or_default(),
        excerpt: input.excerpt.unwrap_or_default(),
    };

    let article = ArticleRepo::create(&state.pool, session.admin_id, &create).await?;
    tracing::info!(article_id = article.id, admin_id = session.admin_id, "Article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// GET /api/admin/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::find_for_author(&state.pool, session.admin_id, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(article))
}

/// PUT /api/admin/articles/{id}
pub async fn update_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateArticleRequest>,
) -> AppResult<Json<Article>> {
    let update = to_update(input)?;

    let article = ArticleRepo::update_for_author(&state.pool, session.admin_id, id, &update)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(article_id = id, admin_id = session.admin_id, "Article updated");

    Ok(Json(article))
}

/// DELETE /api/admin/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<DeleteResponse>> {
    if !ArticleRepo::delete_for_author(&state.pool, session.admin_id, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(article_id = id, admin_id = session.admin_id, "Article deleted");
    Ok(Json(DeleteResponse { success: true }))
}

/// PATCH /api/admin/articles/{id}/publish
pub async fn publish_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Article>> {
    set_status(&state, &session, id, ArticleStatus::Published).await
}

/// PATCH /api/admin/articles/{id}/unpublish
pub async fn unpublish_article(
    State(state): State<AppState>,
    session: AdminSession,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Article>> {
    set_status(&state, &session, id, ArticleStatus::Draft).await
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn set_status(
    state: &AppState,
    session: &AdminSession,
    id: DbId,
    status: ArticleStatus,
) -> AppResult<Json<Article>> {
    let article = ArticleRepo::set_status_for_author(&state.pool, session.admin_id, id, status)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(
        article_id = id,
        admin_id = session.admin_id,
        status = status.as_str(),
        "Article status changed"
    );
    Ok(Json(article))
}

/// Validate a partial update. Title and short description are trimmed and
/// must not be blank when present; other fields are stored as given.
fn to_update(input: UpdateArticleRequest) -> Result<UpdateArticle, CoreError> {
    let title = input
        .title
        .as_deref()
        .map(|t| validate_title(Some(t)))
        .transpose()?;
    let short_description = input
        .short_description
        .as_deref()
        .map(|d| validate_short_description(Some(d)))
        .transpose()?;

    Ok(UpdateArticle {
        title,
        short_description,
        thumbnail: input.thumbnail,
        content: input.content,
        excerpt: input.excerpt,
    })
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Article",
        id,
    })
}
