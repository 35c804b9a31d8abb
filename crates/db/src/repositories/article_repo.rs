//! Repository for the `articles` table.
//!
//! Owner-scoped methods take the calling admin's id as a required argument
//! and put `author_id = $n` into every statement, so an admin can never
//! read or modify another admin's article. A foreign article is
//! indistinguishable from a missing one (`None` / `false`).

use inkpost_core::article::{ArticleFilter, ArticleStatus, STATUS_PUBLISHED};
use inkpost_core::types::DbId;
use sqlx::PgPool;

use crate::models::article::{Article, CreateArticle, PublicArticleSummary, UpdateArticle};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, thumbnail, short_description, content, excerpt, \
                       status, author_id, created_at, updated_at";

/// Columns of the public list projection.
const SUMMARY_COLUMNS: &str = "id, title, short_description, excerpt, thumbnail, updated_at";

/// Owner, search and status predicates shared by the list and count queries.
///
/// `$1` author id, `$2` ILIKE pattern or NULL, `$3` status or NULL.
const OWNER_FILTER: &str = "author_id = $1
       AND ($2::TEXT IS NULL
            OR title ILIKE $2
            OR short_description ILIKE $2
            OR content ILIKE $2
            OR excerpt ILIKE $2)
       AND ($3::TEXT IS NULL OR status = $3)";

/// Provides owner-scoped CRUD and the public read-only queries for articles.
pub struct ArticleRepo;

impl ArticleRepo {
    // -----------------------------------------------------------------------
    // Owner-scoped
    // -----------------------------------------------------------------------

    /// Insert a new draft owned by `author_id`.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateArticle,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles
                (title, short_description, thumbnail, content, excerpt, status, author_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.thumbnail)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(ArticleStatus::Draft.as_str())
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find one of `author_id`'s articles.
    pub async fn find_for_author(
        pool: &PgPool,
        author_id: DbId,
        id: DbId,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND author_id = $2");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of `author_id`'s articles matching `filter`, ordered by
    /// `updated_at` in the filter's direction.
    pub async fn list_for_author(
        pool: &PgPool,
        author_id: DbId,
        filter: &ArticleFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let direction = filter.sort.sql_direction();
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE {OWNER_FILTER}
             ORDER BY updated_at {direction}, id {direction}
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(author_id)
            .bind(filter.search_pattern())
            .bind(filter.status.map(ArticleStatus::as_str))
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count `author_id`'s articles matching `filter`.
    pub async fn count_for_author(
        pool: &PgPool,
        author_id: DbId,
        filter: &ArticleFilter,
    ) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM articles WHERE {OWNER_FILTER}");
        let (count,): (i64,) = sqlx::query_as(&query)
            .bind(author_id)
            .bind(filter.search_pattern())
            .bind(filter.status.map(ArticleStatus::as_str))
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Apply a partial update to one of `author_id`'s articles and refresh
    /// `updated_at`. Returns `None` if no such article is owned by the caller.
    pub async fn update_for_author(
        pool: &PgPool,
        author_id: DbId,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET
                title = COALESCE($3, title),
                short_description = COALESCE($4, short_description),
                thumbnail = COALESCE($5, thumbnail),
                content = COALESCE($6, content),
                excerpt = COALESCE($7, excerpt),
                updated_at = NOW()
             WHERE id = $1 AND author_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(author_id)
            .bind(&input.title)
            .bind(&input.short_description)
            .bind(&input.thumbnail)
            .bind(&input.content)
            .bind(&input.excerpt)
            .fetch_optional(pool)
            .await
    }

    /// Unconditionally set the status of one of `author_id`'s articles and
    /// refresh `updated_at`. Setting the current status again is harmless.
    pub async fn set_status_for_author(
        pool: &PgPool,
        author_id: DbId,
        id: DbId,
        status: ArticleStatus,
    ) -> Result<Option<Article>, sqlx::Error> {
        let query = format!(
            "UPDATE articles SET status = $3, updated_at = NOW()
             WHERE id = $1 AND author_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(author_id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Delete one of `author_id`'s articles. Returns `true` if a row was removed.
    pub async fn delete_for_author(
        pool: &PgPool,
        author_id: DbId,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1 AND author_id = $2")
            .bind(id)
            .bind(author_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Public (published only)
    // -----------------------------------------------------------------------

    /// List a page of published articles, newest first, without content.
    pub async fn list_published(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<PublicArticleSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM articles
             WHERE status = $1
             ORDER BY updated_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, PublicArticleSummary>(&query)
            .bind(STATUS_PUBLISHED)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count published articles.
    pub async fn count_published(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM articles WHERE status = $1")
            .bind(STATUS_PUBLISHED)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Find an article only if it is published. Drafts are invisible.
    pub async fn find_published(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND status = $2");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .bind(STATUS_PUBLISHED)
            .fetch_optional(pool)
            .await
    }
}
