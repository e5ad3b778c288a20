//! HTTP-level tests for the talent profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

fn ava() -> serde_json::Value {
    serde_json::json!({
        "name": "Ava Collins",
        "city": "Miami",
        "skills": ["VIP", "Bottle Service"],
        "experience_years": 3,
        "hourly_rate": 45.0
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_profile_returns_201_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/models", ava()).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_string());
    assert_eq!(json["name"], "Ava Collins");
    assert_eq!(json["skills"], serde_json::json!(["VIP", "Bottle Service"]));
    assert!(json["created_at"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn city_filter_returns_profile_exactly_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/api/models", ava()).await).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/models",
        serde_json::json!({"name": "Mia Lopez", "city": "New York"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/models?city=Miami").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let hits = json.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["id"], created["id"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn skill_filter_is_exact_element_match(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/models", ava()).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/models?skill=VIP").await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Substring and case variants find nothing.
    for query in ["VI", "vip", "Bottle"] {
        let app = common::build_test_app(pool.clone());
        let json = body_json(get(app, &format!("/api/models?skill={query}")).await).await;
        assert!(json.as_array().unwrap().is_empty(), "'{query}' should not match");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn defaults_apply_to_omitted_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/models",
        serde_json::json!({"name": "Aria Kim", "city": "Seattle"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["experience_years"], 0);
    assert_eq!(json["skills"], serde_json::json!([]));
    assert!(json["hourly_rate"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn out_of_range_fields_fail_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/models",
        serde_json::json!({"name": "X", "city": "Miami", "experience_years": 99}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("experience_years"));

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/models",
        serde_json::json!({"name": "X", "city": "Miami", "hourly_rate": -5.0}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
