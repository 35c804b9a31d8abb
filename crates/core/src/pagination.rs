//! Page-number pagination used by the article listings.
//!
//! Query parameters are parsed leniently: anything that does not parse as
//! an integer falls back to the default instead of rejecting the request.

use serde::Serialize;

/// Fixed page size for the admin article list.
pub const ADMIN_PAGE_SIZE: i64 = 20;

/// Default page size for the public article list.
pub const DEFAULT_PUBLIC_LIMIT: i64 = 12;

/// Largest page size the public article list will serve.
pub const MAX_PUBLIC_LIMIT: i64 = 48;

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PageInfo {
    /// Build page metadata. `total_pages` is never below 1, even when
    /// nothing matched.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total <= 0 {
            1
        } else {
            (total + limit - 1) / limit
        };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }
}

/// Parse an optional `page` parameter. Missing, unparsable, zero and
/// negative values all yield page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(1)
        .max(1)
}

/// Parse an optional public `limit` parameter.
///
/// Missing, unparsable and zero values yield [`DEFAULT_PUBLIC_LIMIT`];
/// the result is clamped to `1..=MAX_PUBLIC_LIMIT`.
pub fn parse_public_limit(raw: Option<&str>) -> i64 {
    let limit = raw
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n != 0);
    clamp_limit(limit, DEFAULT_PUBLIC_LIMIT, MAX_PUBLIC_LIMIT)
}

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Row offset of the first item on `page`.
///
/// Saturates at `i64::MAX`, so a page far past the end still yields a
/// valid (empty) query instead of overflowing.
pub fn offset(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit.max(0))
}
