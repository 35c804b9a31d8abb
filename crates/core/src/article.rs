//! Article status workflow, list filters, and field validation.

use crate::error::CoreError;

pub const STATUS_DRAFT: &str = "draft";
pub const STATUS_PUBLISHED: &str = "published";

/// Publication state of an article. New articles always start as drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleStatus {
    #[default]
    Draft,
    Published,
}

impl ArticleStatus {
    /// Database / wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => STATUS_DRAFT,
            Self::Published => STATUS_PUBLISHED,
        }
    }

    /// Parse a stored or requested status. Returns `None` for anything else.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            STATUS_DRAFT => Some(Self::Draft),
            STATUS_PUBLISHED => Some(Self::Published),
            _ => None,
        }
    }
}

/// Sort direction on `updated_at` for the admin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSort {
    #[default]
    Newest,
    Oldest,
}

impl ArticleSort {
    /// `"oldest"` selects ascending order; anything else is newest-first.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("oldest") => Self::Oldest,
            _ => Self::Newest,
        }
    }

    /// SQL direction keyword for `ORDER BY updated_at`.
    pub fn sql_direction(self) -> &'static str {
        match self {
            Self::Newest => "DESC",
            Self::Oldest => "ASC",
        }
    }
}

/// Normalised filter for an owner's article list.
///
/// The owner is not part of this struct: the repository takes the caller's
/// admin id as its own required argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    /// Trimmed, non-empty search term.
    pub search: Option<String>,
    /// `None` means every status.
    pub status: Option<ArticleStatus>,
    pub sort: ArticleSort,
}

impl ArticleFilter {
    /// Build a filter from raw query parameters.
    ///
    /// An empty search is dropped; a status other than `draft`/`published`
    /// (including `all`) disables status filtering.
    pub fn from_params(search: Option<&str>, status: Option<&str>, sort: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Self {
            search,
            status: status.and_then(ArticleStatus::parse),
            sort: ArticleSort::parse(sort),
        }
    }

    /// The search term as an `ILIKE` pattern matching it as a literal substring.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(like_pattern)
    }
}

/// Wrap `term` in `%` wildcards, escaping `\`, `%` and `_` so the term is
/// matched literally by `ILIKE`.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Validate a title and return it trimmed.
pub fn validate_title(title: Option<&str>) -> Result<String, CoreError> {
    non_blank(title, "Title is required")
}

/// Validate a short description and return it trimmed.
pub fn validate_short_description(value: Option<&str>) -> Result<String, CoreError> {
    non_blank(value, "Short description is required")
}

fn non_blank(value: Option<&str>, message: &str) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(CoreError::Validation(message.to_string())),
    }
}
