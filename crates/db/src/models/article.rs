//! Article model, public projection, and DTOs.

use inkpost_core::article::ArticleStatus;
use inkpost_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub thumbnail: String,
    pub short_description: String,
    pub content: String,
    pub excerpt: String,
    /// `draft` or `published` (enforced by a CHECK constraint).
    pub status: String,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Article {
    pub fn status(&self) -> Option<ArticleStatus> {
        ArticleStatus::parse(&self.status)
    }
}

/// Reduced projection for the public article list. Content is omitted.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicArticleSummary {
    pub id: DbId,
    pub title: String,
    pub short_description: String,
    pub excerpt: String,
    pub thumbnail: String,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new article. Always created as a draft.
#[derive(Debug)]
pub struct CreateArticle {
    pub title: String,
    pub short_description: String,
    pub thumbnail: String,
    pub content: String,
    pub excerpt: String,
}

/// DTO for a partial article update. `None` leaves the column unchanged.
#[derive(Debug, Default)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub short_description: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
}
