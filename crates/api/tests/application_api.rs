//! HTTP-level tests for the application endpoints.
//!
//! Referential checks run only at creation: a malformed id is a 400, a
//! well-formed id that resolves to nothing is a 404.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;
use uuid::Uuid;

async fn seed_gig_and_profile(pool: &PgPool) -> (String, String) {
    let app = common::build_test_app(pool.clone());
    let gig = body_json(
        post_json(
            app,
            "/api/gigs",
            serde_json::json!({
                "title": "VIP Night", "club_name": "Blue Flame",
                "city": "Miami", "date": "Fri 10PM-2AM"
            }),
        )
        .await,
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let profile = body_json(
        post_json(
            app,
            "/api/models",
            serde_json::json!({"name": "Ava Collins", "city": "Miami"}),
        )
        .await,
    )
    .await;

    (
        gig["id"].as_str().unwrap().to_string(),
        profile["id"].as_str().unwrap().to_string(),
    )
}

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_to_gig_succeeds(pool: PgPool) {
    let (gig_id, model_id) = seed_gig_and_profile(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/applications",
        serde_json::json!({
            "gig_id": gig_id,
            "model_id": model_id,
            "message": "Available all night"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["gig_id"], serde_json::json!(gig_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_ids_are_rejected(pool: PgPool) {
    let (gig_id, _) = seed_gig_and_profile(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/applications",
        serde_json::json!({"gig_id": gig_id, "model_id": "not-an-id"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unresolved_references_are_404(pool: PgPool) {
    let (gig_id, model_id) = seed_gig_and_profile(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/applications",
        serde_json::json!({"gig_id": Uuid::new_v4().to_string(), "model_id": model_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/applications",
        serde_json::json!({"gig_id": gig_id, "model_id": Uuid::new_v4().to_string()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_status_is_rejected(pool: PgPool) {
    let (gig_id, model_id) = seed_gig_and_profile(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/applications",
        serde_json::json!({"gig_id": gig_id, "model_id": model_id, "status": "waitlisted"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_filters_by_gig_and_model(pool: PgPool) {
    let (gig_id, model_id) = seed_gig_and_profile(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/applications",
        serde_json::json!({"gig_id": gig_id, "model_id": model_id}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/applications?gig_id={gig_id}")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/api/applications?model_id={model_id}")).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // A well-formed id that matches nothing filters everything out.
    let app = common::build_test_app(pool.clone());
    let other = Uuid::new_v4();
    let json = body_json(get(app, &format!("/api/applications?gig_id={other}")).await).await;
    assert!(json.as_array().unwrap().is_empty());

    // A malformed filter id is a 400.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/applications?gig_id=oops").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
