//! Integration tests for the public surface: published articles,
//! testimonials, and inquiries.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, build_test_app, get, post_json, send_empty, send_json, signup_and_confirm};
use inkpost_db::models::testimonial::CreateTestimonial;
use inkpost_db::repositories::TestimonialRepo;
use serde_json::{json, Value};
use sqlx::PgPool;

/// Create an article as `cookie`'s admin, optionally publishing it.
async fn seed_article(pool: &PgPool, cookie: &str, title: &str, publish: bool) -> i64 {
    let response = send_json(
        build_test_app(pool.clone()),
        Method::POST,
        "/api/admin/articles",
        json!({ "title": title, "shortDescription": "D", "content": "<p>Body</p>" }),
        Some(cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    if publish {
        let response = send_empty(
            build_test_app(pool.clone()),
            Method::PATCH,
            &format!("/api/admin/articles/{id}/publish"),
            cookie,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
    id
}

async fn public_list(pool: &PgPool, query: &str) -> Value {
    let response = get(build_test_app(pool.clone()), &format!("/api/articles{query}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_shows_only_published(pool: PgPool) {
    let alice = signup_and_confirm(&pool, "alice@x.com").await;
    let bob = signup_and_confirm(&pool, "bob@x.com").await;
    seed_article(&pool, &alice, "Draft", false).await;
    let first = seed_article(&pool, &alice, "Alice live", true).await;
    let second = seed_article(&pool, &bob, "Bob live", true).await;

    let json = public_list(&pool, "").await;
    let articles = json["articles"].as_array().unwrap();

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0]["id"], second, "newest first");
    assert_eq!(articles[1]["id"], first);
    assert_eq!(
        json["pagination"],
        json!({ "page": 1, "limit": 12, "total": 2, "totalPages": 1 })
    );
}

/// List items carry the summary fields but never the body.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_items_omit_content(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    seed_article(&pool, &cookie, "Live", true).await;

    let json = public_list(&pool, "").await;
    let item = json["articles"][0].as_object().unwrap();

    for key in ["id", "title", "shortDescription", "excerpt", "thumbnail", "updatedAt"] {
        assert!(item.contains_key(key), "missing {key}");
    }
    assert!(!item.contains_key("content"));
    assert!(!item.contains_key("status"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_limit_is_clamped(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    for i in 0..3 {
        seed_article(&pool, &cookie, &format!("Live {i}"), true).await;
    }

    let json = public_list(&pool, "?limit=2").await;
    assert_eq!(json["articles"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["totalPages"], 2);

    let json = public_list(&pool, "?limit=2&page=2").await;
    assert_eq!(json["articles"].as_array().unwrap().len(), 1);

    assert_eq!(public_list(&pool, "?limit=500").await["pagination"]["limit"], 48);
    assert_eq!(public_list(&pool, "?limit=0").await["pagination"]["limit"], 12);
    assert_eq!(public_list(&pool, "?limit=abc").await["pagination"]["limit"], 12);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_list_huge_page_is_empty(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    seed_article(&pool, &cookie, "Live", true).await;

    let json = public_list(&pool, "?page=9223372036854775807&limit=48").await;
    assert_eq!(json["articles"], json!([]));
    assert_eq!(json["pagination"]["page"], i64::MAX);
    assert_eq!(json["pagination"]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_get_published_article(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    let id = seed_article(&pool, &cookie, "Live", true).await;

    let response = get(build_test_app(pool), &format!("/api/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Live");
    assert_eq!(json["content"], "<p>Body</p>");
    assert_eq!(json["status"], "published");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_public_get_draft_or_missing_is_not_found(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    let draft = seed_article(&pool, &cookie, "Hidden", false).await;

    for uri in [format!("/api/articles/{draft}"), "/api/articles/999999".to_string()] {
        let response = get(build_test_app(pool.clone()), &uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }
}

/// Publish makes an article public; unpublish takes it back down.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_publish_unpublish_visibility(pool: PgPool) {
    let cookie = signup_and_confirm(&pool, "a@x.com").await;
    let id = seed_article(&pool, &cookie, "Toggle", true).await;
    let public_uri = format!("/api/articles/{id}");

    let response = get(build_test_app(pool.clone()), &public_uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send_empty(
        build_test_app(pool.clone()),
        Method::PATCH,
        &format!("/api/admin/articles/{id}/unpublish"),
        &cookie,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(build_test_app(pool.clone()), &public_uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(public_list(&pool, "").await["pagination"]["total"], 0);
}

// ---------------------------------------------------------------------------
// Testimonials
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_testimonials_in_display_order(pool: PgPool) {
    for (name, order) in [("Second", 2), ("First", 1), ("Also first", 1)] {
        TestimonialRepo::create(
            &pool,
            &CreateTestimonial {
                name: name.to_string(),
                image: format!("https://cdn.test/{order}.jpg"),
                quote: format!("{name} says hi"),
                sort_order: order,
            },
        )
        .await
        .unwrap();
    }

    let response = get(build_test_app(pool), "/api/testimonials").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let names: Vec<&str> = json["testimonials"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();

    assert_eq!(names, ["First", "Also first", "Second"]);
    assert_eq!(
        json["testimonials"][0],
        json!({ "name": "First", "image": "https://cdn.test/1.jpg", "quote": "First says hi" })
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_testimonials_empty(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/testimonials").await;
    assert_eq!(body_json(response).await, json!({ "testimonials": [] }));
}

// ---------------------------------------------------------------------------
// Inquiries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_inquiry(pool: PgPool) {
    let body = json!({
        "source": "for-law-firms",
        "name": "  Ann  ",
        "email": "ann@firm.com",
        "message": "Hello",
    });
    let response = post_json(build_test_app(pool.clone()), "/api/inquiries", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    let id = json["id"].as_i64().unwrap();

    let (name, source): (String, String) =
        sqlx::query_as("SELECT name, source FROM inquiries WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(name, "Ann");
    assert_eq!(source, "for-law-firms");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_inquiry_validation(pool: PgPool) {
    let cases = [
        (
            json!({ "source": "newsletter", "name": "A", "email": "a@x.com" }),
            "Invalid source",
        ),
        (
            json!({ "source": "contact", "name": " ", "email": "a@x.com" }),
            "Name is required",
        ),
        (
            json!({ "source": "private-work", "name": "A" }),
            "Email is required",
        ),
    ];

    for (body, message) in cases {
        let response = post_json(build_test_app(pool.clone()), "/api/inquiries", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], message);
    }

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM inquiries")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

/// A field of the wrong type is a JSON 400 that does not echo parser details.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_inquiry_with_wrong_field_type(pool: PgPool) {
    let body = json!({ "source": "contact", "name": 5, "email": "a@x.com" });
    let response = post_json(build_test_app(pool), "/api/inquiries", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid request body", "code": "BAD_REQUEST" })
    );
}
