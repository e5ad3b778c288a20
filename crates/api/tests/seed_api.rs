//! Tests for the idempotent demo-data loader.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn seed_loads_demo_data(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, "/api/seed").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["models_before"], 0);
    assert_eq!(json["models_created"], 10);
    assert_eq!(json["total_models"], 10);
    assert_eq!(json["clubs_created"], 5);
    assert_eq!(json["gigs_created"], 5);

    let app = common::build_test_app(pool);
    let models = body_json(get(app, "/api/models").await).await;
    assert_eq!(models.as_array().unwrap().len(), 10);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn seed_is_idempotent_once_thresholds_are_met(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_empty(app, "/api/seed").await;

    let app = common::build_test_app(pool);
    let response = post_empty(app, "/api/seed").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["models_before"], 10);
    assert_eq!(json["models_created"], 0);
    assert_eq!(json["total_models"], 10);
    assert_eq!(json["clubs_created"], 0);
    assert_eq!(json["gigs_created"], 0);
    assert_eq!(json["total_gigs"], 5);
}
